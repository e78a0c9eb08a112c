//! Apply command implementation.
//!
//! Builds a filter chain from a pipeline file or from flags, runs it over an
//! input image, and writes the result.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::effects::{load_image, save_image};
use crate::error::{Result, StencilError};
use crate::filter::{self, Filter};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::Pipeline;
use crate::types::Colour;

/// Apply a filter pipeline to an image
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    pub output: PathBuf,

    /// Pipeline definition file (YAML)
    #[arg(long, conflicts_with_all = ["blur", "tint"])]
    pub pipeline: Option<PathBuf>,

    /// Gaussian blur radius, applied before any tint
    #[arg(long)]
    pub blur: Option<f64>,

    /// Tint colour (hex; alpha below FF recommended)
    #[arg(long)]
    pub tint: Option<Colour>,
}

pub fn run(args: ApplyArgs) -> Result<()> {
    let printer = Printer::new();

    if args.tint.is_some_and(Colour::is_opaque) {
        printer.warning("Opaque", "tint has full alpha and will hide the image");
    }

    let (built, steps) = build_filter(&args)?;

    printer.status("Loading", &display_path(&args.input));
    let input = load_image(&args.input)?;

    printer.status("Applying", &plural(steps, "effect", "effects"));
    let output = built.apply(&input)?;

    save_image(&output, &args.output)?;
    printer.success("Finished", &display_path(&args.output));

    Ok(())
}

/// Build the filter chain from a pipeline file or from flags.
fn build_filter(args: &ApplyArgs) -> Result<(Filter, usize)> {
    if let Some(path) = &args.pipeline {
        let source = fs::read_to_string(path).map_err(|e| StencilError::Io {
            path: path.clone(),
            message: format!("Failed to read pipeline: {}", e),
        })?;
        let pipeline = Pipeline::parse(&source)?;
        return Ok((pipeline.build()?, pipeline.len()));
    }

    let mut built = Filter::identity();
    let mut steps = 0;
    if let Some(radius) = args.blur {
        built = built.then(filter::blur(radius));
        steps += 1;
    }
    if let Some(colour) = args.tint {
        built = built.then(filter::colour_overlay(colour));
        steps += 1;
    }

    Ok((built, steps))
}
