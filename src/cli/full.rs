//! Full command implementation.
//!
//! One-shot pipeline: generate the Typst document for a single post and
//! compile it straight to PNG. Shares its plumbing with `generate` and
//! `build`.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::compile::compile_file;
use crate::cli::generate::{generate_document, split_slides, PostParams};
use crate::config::DEFAULT_ACCENT;
use crate::error::{Result, RrssError};
use crate::output::Printer;
use crate::template::Layout;

/// Generate and compile one post in a single step
#[derive(Args, Debug)]
pub struct FullArgs {
    /// Post title
    #[arg(long, short)]
    pub title: String,

    /// Quote or excerpt text
    #[arg(long, short)]
    pub quote: String,

    /// Brand name shown in the layout
    #[arg(long, short, default_value = "")]
    pub brand: String,

    /// Background image path, relative to the project root
    #[arg(long, short)]
    pub image: Option<String>,

    /// Accent color hex
    #[arg(long, short, default_value = DEFAULT_ACCENT)]
    pub accent: String,

    /// Extract the accent from the image instead
    #[arg(long)]
    pub auto_accent: bool,

    /// Footer URL
    #[arg(long, short, default_value = "")]
    pub url: String,

    /// Target platform
    #[arg(long, short, default_value = "instagram-post")]
    pub platform: String,

    /// Layout: article, quote, hero, or carousel
    #[arg(long, short, default_value = "article")]
    pub layout: String,

    /// Color theme
    #[arg(long, default_value = "dark")]
    pub theme: String,

    /// Author (quote layout)
    #[arg(long, default_value = "")]
    pub author: String,

    /// Tag label (hero layout)
    #[arg(long)]
    pub tag: Option<String>,

    /// Carousel slides, separated by "|"
    #[arg(long)]
    pub slides: Option<String>,

    /// Add a contour background (carousel layout)
    #[arg(long)]
    pub contour: bool,

    /// Pixels per inch
    #[arg(long, default_value_t = 144)]
    pub ppi: u32,

    /// Output directory for the compiled PNG
    #[arg(long, short = 'd', default_value = "output")]
    pub output_dir: PathBuf,

    /// Output name, without extension
    #[arg(long, short, default_value = "main")]
    pub output_name: String,
}

pub fn run(args: FullArgs, printer: &Printer) -> Result<()> {
    let layout: Layout = args.layout.parse()?;
    let params = PostParams {
        layout,
        platform: args.platform,
        theme: args.theme,
        brand: args.brand,
        title: args.title,
        quote: args.quote,
        accent: args.accent,
        auto_accent: args.auto_accent,
        url: args.url,
        author: args.author,
        tag: args.tag,
        slides: split_slides(args.slides.as_deref()),
        image: args.image,
        contour: args.contour,
    };

    let typ_file = PathBuf::from(format!("{}.typ", args.output_name));
    generate_document(&params, &typ_file, printer)?;

    fs::create_dir_all(&args.output_dir).map_err(|e| RrssError::Io {
        path: args.output_dir.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let output = args.output_dir.join(png_name(&args.output_name, layout));
    compile_file(&typ_file, &output, args.ppi, Path::new("."))?;
    printer.status("Compiled", &args.output_name);
    Ok(())
}

/// Carousels compile one PNG per page via a page-number pattern.
pub(crate) fn png_name(stem: &str, layout: Layout) -> String {
    if layout == Layout::Carousel {
        format!("{}-{{0p}}.png", stem)
    } else {
        format!("{}.png", stem)
    }
}
