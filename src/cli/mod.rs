pub mod build;
pub mod colors;
pub mod compile;
pub mod completions;
pub mod contour;
pub mod extract;
pub mod full;
pub mod generate;
pub mod recolor;
pub mod themes;

use clap::{Parser, Subcommand};

/// rrss - Themed social media image generator
#[derive(Parser, Debug)]
#[command(name = "rrss")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive an eight-role color scheme from a seed color
    Colors(colors::ColorsArgs),

    /// Extract dominant colors from an image
    Extract(extract::ExtractArgs),

    /// Recolor a photo with a theme's duotone gradient
    Recolor(recolor::RecolorArgs),

    /// Generate a contour line-art background
    Contour(contour::ContourArgs),

    /// Generate a Typst document for one post
    Generate(generate::GenerateArgs),

    /// Compile Typst documents to PNG
    Compile(compile::CompileArgs),

    /// Generate and compile one post in a single step
    Full(full::FullArgs),

    /// Build every post declared in a posts.toml
    Build(build::BuildArgs),

    /// List the built-in themes
    Themes(themes::ThemesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
