//! The raster effect engine.
//!
//! Filters never touch pixels directly: they invoke an effect by name with
//! a map of named parameters, and this module dispatches to the raster
//! routine behind that name. Unknown effect names and malformed parameter
//! sets are errors surfaced straight to the caller; there is no fallback
//! and no retry.
//!
//! Supported effects:
//! - `gaussian-blur`: `input` image, `radius` float
//! - `constant-colour`: `colour`, `width`/`height` ints
//! - `source-over`: `background` and `overlay` images

mod io;
mod ops;

pub use io::{load_image, save_image};

use std::collections::HashMap;

use image::RgbaImage;

use crate::error::{Result, StencilError};
use crate::types::Colour;

/// The pixel-buffer type filters operate on.
pub type Image = RgbaImage;

/// A single effect parameter value.
#[derive(Debug, Clone)]
pub enum Param {
    /// Floating point number.
    Float(f64),
    /// Integer.
    Int(i64),
    /// Colour value.
    Colour(Colour),
    /// Pixel buffer.
    Image(Image),
}

/// Named parameters for one effect invocation.
#[derive(Debug, Clone, Default)]
pub struct EffectParams {
    values: HashMap<String, Param>,
}

impl EffectParams {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any previous value under the same name.
    pub fn with(mut self, name: &str, value: Param) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    /// Get a numeric parameter; integers widen to floats.
    pub fn float(&self, name: &str) -> Result<f64> {
        match self.get(name)? {
            Param::Float(value) => Ok(*value),
            Param::Int(value) => Ok(*value as f64),
            _ => Err(type_error(name, "a number")),
        }
    }

    /// Get an integer parameter.
    pub fn int(&self, name: &str) -> Result<i64> {
        match self.get(name)? {
            Param::Int(value) => Ok(*value),
            _ => Err(type_error(name, "an integer")),
        }
    }

    /// Get a colour parameter.
    pub fn colour(&self, name: &str) -> Result<Colour> {
        match self.get(name)? {
            Param::Colour(value) => Ok(*value),
            _ => Err(type_error(name, "a colour")),
        }
    }

    /// Get an image parameter.
    pub fn image(&self, name: &str) -> Result<&Image> {
        match self.get(name)? {
            Param::Image(value) => Ok(value),
            _ => Err(type_error(name, "an image")),
        }
    }

    fn get(&self, name: &str) -> Result<&Param> {
        self.values.get(name).ok_or_else(|| StencilError::Effect {
            message: format!("Missing parameter: {}", name),
            help: None,
        })
    }
}

fn type_error(name: &str, expected: &str) -> StencilError {
    StencilError::Effect {
        message: format!("Parameter {} is not {}", name, expected),
        help: None,
    }
}

/// Invoke an effect by name.
pub fn invoke(effect: &str, params: &EffectParams) -> Result<Image> {
    match effect {
        "gaussian-blur" => {
            let input = params.image("input")?;
            let radius = params.float("radius")?;
            Ok(ops::gaussian_blur(input, radius))
        }
        "constant-colour" => {
            let colour = params.colour("colour")?;
            let width = params.int("width")?.max(0) as u32;
            let height = params.int("height")?.max(0) as u32;
            Ok(ops::constant_colour(colour, width, height))
        }
        "source-over" => {
            let background = params.image("background")?;
            let overlay = params.image("overlay")?;
            Ok(ops::source_over(background, overlay))
        }
        _ => Err(StencilError::Effect {
            message: format!("Unknown effect: {}", effect),
            help: Some(
                "Available effects: gaussian-blur, constant-colour, source-over".to_string(),
            ),
        }),
    }
}
