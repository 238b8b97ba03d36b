//! Generate command implementation.
//!
//! Resolves a post's inputs (accent, background image, contour overlays)
//! and writes the Typst source file for one document. The build command
//! funnels through the same [`PostParams`] path.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::DEFAULT_ACCENT;
use crate::error::{Result, RrssError};
use crate::extract::{suggest_accent, MedianCutQuantizer};
use crate::output::{display_path, Printer};
use crate::render::{generate_edge_contours, generate_noise_contours, NoiseContourOptions};
use crate::template::{DocumentSpec, Layout};
use crate::types::{platform_dimensions, Color, PLATFORMS};

/// Generate a Typst document for one post
#[derive(Args, Debug)]
pub struct GenerateArgs {
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

    /// Output file
    #[arg(long, short, default_value = "main.typ")]
    pub output: PathBuf,
}

/// Fully resolved inputs for one document.
pub(crate) struct PostParams {
    pub layout: Layout,
    pub platform: String,
    pub theme: String,
    pub brand: String,
    pub title: String,
    pub quote: String,
    pub accent: String,
    pub auto_accent: bool,
    pub url: String,
    pub author: String,
    pub tag: Option<String>,
    pub slides: Vec<String>,
    pub image: Option<String>,
    pub contour: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let params = PostParams {
        layout: args.layout.parse()?,
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

    generate_document(&params, &args.output, printer)?;
    Ok(())
}

/// Split a pipe-separated slide list, dropping empty entries.
pub(crate) fn split_slides(slides: Option<&str>) -> Vec<String> {
    slides
        .map(|s| {
            s.split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Resolve accent and background image, then write the Typst source.
pub(crate) fn generate_document(
    params: &PostParams,
    output: &Path,
    printer: &Printer,
) -> Result<PathBuf> {
    if platform_dimensions(&params.platform).is_none() {
        let known: Vec<&str> = PLATFORMS.iter().map(|&(name, _, _)| name).collect();
        return Err(RrssError::Config {
            message: format!("unknown platform: {}", params.platform),
            help: Some(format!("Expected one of: {}", known.join(", "))),
        });
    }

    let accent = resolve_accent(params, printer)?;
    let bg_image = resolve_bg_image(params, printer)?;

    let spec = DocumentSpec {
        layout: params.layout,
        platform: params.platform.clone(),
        theme: params.theme.clone(),
        brand: params.brand.clone(),
        title: params.title.clone(),
        quote: params.quote.clone(),
        accent,
        url: params.url.clone(),
        author: params.author.clone(),
        tag: params.tag.clone(),
        slides: params.slides.clone(),
        bg_image,
    };

    fs::write(output, spec.render()).map_err(|e| RrssError::Io {
        path: output.to_path_buf(),
        message: format!("Failed to write document: {}", e),
    })?;

    printer.status(
        "Generated",
        &format!(
            "{} ({}, {})",
            display_path(output),
            params.layout,
            params.platform
        ),
    );
    Ok(output.to_path_buf())
}

fn resolve_accent(params: &PostParams, printer: &Printer) -> Result<String> {
    if params.auto_accent {
        if let Some(image) = &params.image {
            let accent = suggest_accent(Path::new(image), &MedianCutQuantizer::default())?;
            printer.info("Accent", &format!("{} (extracted from image)", accent));
            return Ok(accent);
        }
    }
    // Normalize to lowercase #rrggbb
    Ok(Color::from_hex(&params.accent)?.to_hex())
}

/// Pick the background image expression for the layout.
///
/// Carousel posts may trace contours from their photo, or synthesize
/// noise contours when there is no photo; article posts use the photo
/// directly. Quote and hero layouts carry no background image.
fn resolve_bg_image(params: &PostParams, printer: &Printer) -> Result<Option<String>> {
    match params.layout {
        Layout::Carousel => {
            if params.contour {
                if let Some(image) = &params.image {
                    let traced = generate_edge_contours(Path::new(image))?;
                    printer.info("Contour", &display_path(&traced));
                    Ok(Some(format!(
                        "image(\"{}\", width: 100%)",
                        traced.display()
                    )))
                } else {
                    let target = Path::new("assets/generated_contours.svg");
                    fs::create_dir_all("assets").map_err(|e| RrssError::Io {
                        path: PathBuf::from("assets"),
                        message: format!("Failed to create assets directory: {}", e),
                    })?;
                    let out =
                        generate_noise_contours(target, &NoiseContourOptions::default())?;
                    printer.info("Contour", &display_path(&out));
                    Ok(Some(format!("image(\"{}\")", out.display())))
                }
            } else if let Some(image) = &params.image {
                Ok(Some(format!("image(\"{}\", width: 100%)", image)))
            } else {
                Ok(None)
            }
        }
        Layout::Article => Ok(params
            .image
            .as_ref()
            .map(|image| format!("image(\"{}\", width: 100%)", image))),
        Layout::Quote | Layout::Hero => Ok(None),
    }
}
