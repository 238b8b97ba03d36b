//! Build command implementation.
//!
//! Drives the whole pipeline from a declarative `posts.toml`: optional
//! recolor pass, document generation, and compilation, one post at a
//! time. A failing post is reported and skipped; the rest still build.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::compile::compile_file;
use crate::cli::generate::{generate_document, PostParams};
use crate::config::{BatchConfig, ResolvedPost, DEFAULT_ACCENT};
use crate::error::{Result, RrssError};
use crate::output::{display_path, plural, Printer};
use crate::render::recolor_image;
use crate::template::Layout;

/// Build every post declared in a posts.toml
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Batch configuration file
    #[arg(default_value = "posts.toml")]
    pub config: PathBuf,

    /// Build only the post with this name
    #[arg(long, short)]
    pub only: Option<String>,

    /// Show what would be generated without building anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output directory for compiled PNGs
    #[arg(long, short = 'd', default_value = "output")]
    pub output_dir: PathBuf,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let config = BatchConfig::load(&args.config)?;
    let posts = select_posts(config.resolve(), args.only.as_deref())?;
    if posts.is_empty() {
        printer.warning("Skipping", "no [[post]] entries found");
        return Ok(());
    }

    printer.info(
        "Building",
        &format!(
            "{} from {}",
            plural(posts.len(), "post", "posts"),
            display_path(&args.config),
        ),
    );

    let mut success = 0usize;
    let mut failed = 0usize;

    for post in &posts {
        printer.status("Post", &format!("{} — {}", post.name, post.title));

        if args.dry_run {
            print_plan(post, printer);
            continue;
        }

        match build_post(post, &args.output_dir, printer) {
            Ok(()) => success += 1,
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", post.name, e));
                failed += 1;
            }
        }
    }

    if !args.dry_run {
        printer.info(
            "Finished",
            &format!("{} built, {} failed", success, failed),
        );
    }
    Ok(())
}

/// Apply the `--only` filter. Asking for an unknown name is an error;
/// an empty config is not.
fn select_posts(posts: Vec<ResolvedPost>, only: Option<&str>) -> Result<Vec<ResolvedPost>> {
    match only {
        None => Ok(posts),
        Some(name) => {
            let selected: Vec<ResolvedPost> =
                posts.into_iter().filter(|p| p.name == name).collect();
            if selected.is_empty() {
                Err(RrssError::Config {
                    message: format!("no post named: {}", name),
                    help: Some("Check the name fields in your posts.toml".to_string()),
                })
            } else {
                Ok(selected)
            }
        }
    }
}

fn print_plan(post: &ResolvedPost, printer: &Printer) {
    let mut details = format!(
        "layout={} platform={} theme={} accent={}",
        post.layout, post.platform, post.theme, post.accent
    );
    if post.recolor {
        details.push_str(&format!(" recolor={}", post.theme));
    }
    printer.info("Plan", &details);
    if let Some(image) = &post.image {
        printer.info("Plan", &format!("image={}", image));
    }
}

fn build_post(post: &ResolvedPost, output_dir: &Path, printer: &Printer) -> Result<()> {
    let layout: Layout = post.layout.parse()?;

    let mut image = post.image.clone();
    if post.recolor {
        if let Some(src) = &post.image {
            image = Some(recolor_post_image(post, src, printer)?);
        }
    }

    let auto_accent = post.accent == "auto";
    let params = PostParams {
        layout,
        platform: post.platform.clone(),
        theme: post.theme.clone(),
        brand: post.brand.clone(),
        title: post.title.clone(),
        quote: post.quote.clone(),
        accent: if auto_accent {
            DEFAULT_ACCENT.to_string()
        } else {
            post.accent.clone()
        },
        auto_accent,
        url: post.url.clone(),
        author: post.author.clone(),
        tag: post.tag.clone(),
        slides: post.slides.clone(),
        image,
        contour: post.contour,
    };

    let typ_file = PathBuf::from(format!("{}.typ", post.name));
    generate_document(&params, &typ_file, printer)?;

    fs::create_dir_all(output_dir).map_err(|e| RrssError::Io {
        path: output_dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let out_name = super::full::png_name(&post.name, layout);
    compile_file(&typ_file, &output_dir.join(out_name), post.ppi, Path::new("."))?;
    printer.status("Compiled", &post.name);
    Ok(())
}

/// Recolor the post's photo into `assets/<stem>_<theme>.jpg` and return
/// the new relative path.
fn recolor_post_image(post: &ResolvedPost, src: &str, printer: &Printer) -> Result<String> {
    let intensity = post.recolor_intensity.clamp(0.0, 1.0);
    printer.status(
        "Recoloring",
        &format!("{} ({}, intensity {})", src, post.theme, intensity),
    );

    fs::create_dir_all("assets").map_err(|e| RrssError::Io {
        path: PathBuf::from("assets"),
        message: format!("Failed to create assets directory: {}", e),
    })?;

    let stem = Path::new(src)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let recolored = PathBuf::from(format!("assets/{}_{}.jpg", stem, post.theme));
    recolor_image(Path::new(src), &post.theme, Some(&recolored), intensity)?;
    Ok(recolored.display().to_string())
}
