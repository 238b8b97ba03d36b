//! Themes command implementation.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::{Role, THEMES};

/// List the built-in themes
#[derive(Args, Debug)]
pub struct ThemesArgs {}

pub fn run(_args: ThemesArgs, printer: &Printer) -> Result<()> {
    for theme in &THEMES {
        println!("{}", theme.name);
        for role in Role::ALL {
            let color = theme.palette.get(role);
            println!(
                "  {:<10} {}  {}",
                role.name(),
                color.to_hex(),
                printer.swatch(color)
            );
        }
        println!();
    }
    Ok(())
}
