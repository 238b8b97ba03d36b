use clap::Parser;
use miette::Result;
use rrss::cli::{Cli, Commands};
use rrss::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Colors(args) => rrss::cli::colors::run(args, &printer)?,
        Commands::Extract(args) => rrss::cli::extract::run(args, &printer)?,
        Commands::Recolor(args) => rrss::cli::recolor::run(args, &printer)?,
        Commands::Contour(args) => rrss::cli::contour::run(args, &printer)?,
        Commands::Generate(args) => rrss::cli::generate::run(args, &printer)?,
        Commands::Compile(args) => rrss::cli::compile::run(args, &printer)?,
        Commands::Full(args) => rrss::cli::full::run(args, &printer)?,
        Commands::Build(args) => rrss::cli::build::run(args, &printer)?,
        Commands::Themes(args) => rrss::cli::themes::run(args, &printer)?,
        Commands::Completions(args) => rrss::cli::completions::run(args)?,
    }

    Ok(())
}
