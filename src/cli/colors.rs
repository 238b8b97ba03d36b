//! Colors command implementation.
//!
//! Derives the full eight-role palette from a single seed color and
//! prints it as a table, JSON, or a Typst theme block.

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::output::Printer;
use crate::types::{Color, Palette};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorsFormat {
    Table,
    Json,
    Typst,
}

/// Derive an eight-role color scheme from a seed color
#[derive(Args, Debug)]
pub struct ColorsArgs {
    /// Seed color as a hex string, e.g. "#e94560"
    pub base_color: String,

    /// Output format
    #[arg(long, short, value_enum, default_value = "table")]
    pub format: ColorsFormat,

    /// Scheme name used in Typst output
    #[arg(long, short, default_value = "custom")]
    pub name: String,
}

pub fn run(args: ColorsArgs, printer: &Printer) -> Result<()> {
    let seed = Color::from_hex(&args.base_color)?;
    let palette = Palette::from_seed(seed);

    match args.format {
        ColorsFormat::Json => println!("{}", palette.to_json()),
        ColorsFormat::Typst => println!("{}", palette.to_typst(&args.name)),
        ColorsFormat::Table => print_table(&palette, printer),
    }

    Ok(())
}

pub(crate) fn print_table(palette: &Palette, printer: &Printer) {
    for (role, color) in palette.entries() {
        println!("{:<10} {}  {}", role.name(), color.to_hex(), printer.swatch(color));
    }
}
