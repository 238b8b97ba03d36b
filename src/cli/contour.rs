//! Contour command implementation.
//!
//! Two modes: trace the edges of an existing photo into a transparent PNG
//! overlay, or synthesize terrain-style contour lines from noise when no
//! photo exists.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, RrssError};
use crate::output::{display_path, Printer};
use crate::render::{generate_edge_contours, generate_noise_contours, NoiseContourOptions};

/// Generate a contour line-art background
#[derive(Args, Debug)]
pub struct ContourArgs {
    /// Photo to trace; omit to synthesize contours from noise
    #[arg(long, short)]
    pub image: Option<PathBuf>,

    /// Canvas width for synthesized contours
    #[arg(long, default_value_t = 3240)]
    pub width: u32,

    /// Canvas height for synthesized contours
    #[arg(long, default_value_t = 1350)]
    pub height: u32,

    /// Undulation density (higher means tighter contours)
    #[arg(long, default_value_t = 4)]
    pub scale: u32,

    /// Number of contour lines
    #[arg(long, default_value_t = 15)]
    pub levels: usize,

    /// Seed for reproducible noise
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output path for the synthesized SVG
    #[arg(long, short, default_value = "assets/generated_contours.svg")]
    pub output: PathBuf,
}

pub fn run(args: ContourArgs, printer: &Printer) -> Result<()> {
    if let Some(image) = &args.image {
        printer.status("Tracing", &display_path(image));
        let out = generate_edge_contours(image)?;
        printer.status("Saved", &display_path(&out));
        return Ok(());
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| RrssError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    let opts = NoiseContourOptions {
        width: args.width,
        height: args.height,
        scale: args.scale,
        levels: args.levels,
        seed: args.seed,
    };
    printer.status(
        "Generating",
        &format!("{}x{} noise contours", opts.width, opts.height),
    );
    let out = generate_noise_contours(&args.output, &opts)?;
    printer.status("Saved", &display_path(&out));
    Ok(())
}
