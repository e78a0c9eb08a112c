pub mod apply;
pub mod completions;
pub mod range;

use clap::{Parser, Subcommand};

/// stencil - composable region checks and image filter pipelines
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a filter pipeline to an image
    Apply(apply::ApplyArgs),

    /// Check whether a target position lies in range
    Range(range::RangeArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
