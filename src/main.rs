use clap::Parser;
use miette::Result;
use stencil::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply(args) => stencil::cli::apply::run(args)?,
        Commands::Range(args) => stencil::cli::range::run(args)?,
        Commands::Completions(args) => stencil::cli::completions::run(args)?,
    }

    Ok(())
}
