//! Extract command implementation.
//!
//! Quantizes a photo into its dominant colors. Can also suggest an accent
//! color, or grow a full scheme from the most dominant color.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::extract::{extract_colors, suggest_accent, MedianCutQuantizer};
use crate::output::{display_path, plural, Printer};
use crate::types::{Color, Palette};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractFormat {
    Table,
    Json,
    /// Derive a full scheme from the most dominant color
    Palette,
}

/// Extract dominant colors from an image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Image to analyze
    pub image: PathBuf,

    /// Number of colors to extract
    #[arg(long, short, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Output format
    #[arg(long, short, value_enum, default_value = "table")]
    pub format: ExtractFormat,

    /// Print only a suggested accent color
    #[arg(long)]
    pub suggest_accent: bool,

    /// Scheme name used with --format palette
    #[arg(long, short, default_value = "extracted")]
    pub name: String,
}

pub fn run(args: ExtractArgs, printer: &Printer) -> Result<()> {
    let quantizer = MedianCutQuantizer::default();

    if args.suggest_accent {
        let accent = suggest_accent(&args.image, &quantizer)?;
        let color = Color::from_hex(&accent)?;
        printer.status("Suggesting", &format!("accent for {}", display_path(&args.image)));
        println!("{}  {}", accent, printer.swatch(color));
        return Ok(());
    }

    let colors = extract_colors(&args.image, args.count as usize, &quantizer)?;
    printer.status(
        "Extracted",
        &format!(
            "{} from {}",
            plural(colors.len(), "color", "colors"),
            display_path(&args.image),
        ),
    );

    match args.format {
        ExtractFormat::Json => {
            let entries: Vec<serde_json::Value> = colors
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "hex": c.hex,
                        "rgb": c.rgb,
                        "proportion": c.proportion,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries).unwrap_or_default());
        }
        ExtractFormat::Palette => {
            let Some(base) = colors.first() else {
                printer.warning("Skipping", "no colors extracted");
                return Ok(());
            };
            let seed = Color::rgb(base.rgb[0], base.rgb[1], base.rgb[2]);
            let palette = Palette::from_seed(seed);
            super::colors::print_table(&palette, printer);
        }
        ExtractFormat::Table => {
            for (i, c) in colors.iter().enumerate() {
                println!(
                    "{:>2}. {}  {:5.1}%  {}",
                    i + 1,
                    c.hex,
                    c.proportion * 100.0,
                    printer.swatch(Color::rgb(c.rgb[0], c.rgb[1], c.rgb[2])),
                );
            }
        }
    }

    Ok(())
}
