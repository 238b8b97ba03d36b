//! Recolor command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::recolor_image;

/// Recolor a photo with a theme's duotone gradient
#[derive(Args, Debug)]
pub struct RecolorArgs {
    /// Photo to recolor
    pub image: PathBuf,

    /// Theme whose bg/primary colors drive the gradient
    #[arg(long, short, default_value = "dark")]
    pub theme: String,

    /// Output path (default: <stem>_<theme>.<ext>)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Blend strength, 0.0 keeps the original, 1.0 is full duotone
    #[arg(long, short, default_value_t = 0.7)]
    pub intensity: f64,
}

pub fn run(args: RecolorArgs, printer: &Printer) -> Result<()> {
    let intensity = args.intensity.clamp(0.0, 1.0);
    printer.status(
        "Recoloring",
        &format!(
            "{} ({}, intensity {})",
            display_path(&args.image),
            args.theme,
            intensity
        ),
    );

    let out = recolor_image(&args.image, &args.theme, args.output.as_deref(), intensity)?;
    printer.status("Saved", &display_path(&out));
    Ok(())
}
