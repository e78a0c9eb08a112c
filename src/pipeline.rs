//! Declarative filter pipelines.
//!
//! A pipeline file is a YAML document listing effects in application order:
//!
//! ```yaml
//! pipeline:
//!   - effect: blur
//!     radius: 4.0
//!   - effect: colour-overlay
//!     colour: "#FF000040"
//! ```
//!
//! [`Pipeline::build`] folds the steps into a single [`Filter`], first step
//! applied first. An empty pipeline builds the identity filter.

use serde::Deserialize;

use crate::error::{Result, StencilError};
use crate::filter::{self, Filter};
use crate::types::Colour;

/// One step of a pipeline definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "effect", rename_all = "kebab-case")]
pub enum Step {
    /// Gaussian blur with the given radius.
    Blur { radius: f64 },

    /// Tint by compositing a flat colour over the image.
    ColourOverlay { colour: String },

    /// Replace the image with a flat colour at the same extent.
    ConstantColour { colour: String },
}

impl Step {
    /// Build the filter for this step.
    fn build(&self) -> Result<Filter> {
        match self {
            Step::Blur { radius } => Ok(filter::blur(*radius)),
            Step::ColourOverlay { colour } => {
                Ok(filter::colour_overlay(Colour::from_hex(colour)?))
            }
            Step::ConstantColour { colour } => {
                Ok(filter::colour_generator(Colour::from_hex(colour)?))
            }
        }
    }
}

/// A parsed pipeline definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pipeline {
    pub pipeline: Vec<Step>,
}

impl Pipeline {
    /// Parse a pipeline definition from YAML source.
    pub fn parse(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).map_err(|e| StencilError::Parse {
            message: format!("Invalid pipeline: {}", e),
            help: Some("Available effects: blur, colour-overlay, constant-colour".to_string()),
        })
    }

    /// Number of steps in the pipeline.
    pub fn len(&self) -> usize {
        self.pipeline.len()
    }

    /// Check if the pipeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.pipeline.is_empty()
    }

    /// Fold the steps into a single filter, first step applied first.
    pub fn build(&self) -> Result<Filter> {
        let mut built = Filter::identity();
        for step in &self.pipeline {
            built = built.then(step.build()?);
        }
        Ok(built)
    }
}
