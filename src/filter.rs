//! Filter algebra: composable image transformations.
//!
//! A [`Filter`] is a first-class transformation value: a pure function from
//! one image to another. Factories package named parameters and invoke the
//! [effect engine](crate::effects) by name, so the combinators themselves
//! never touch pixels. Chains read left to right via [`Filter::then`].
//!
//! Filters never mutate their input. When the effect engine fails (unknown
//! effect, malformed parameters) the error propagates out of the chain
//! untouched and the remaining filters are skipped.

use std::rc::Rc;

use crate::effects::{self, EffectParams, Image, Param};
use crate::error::Result;
use crate::types::Colour;

/// An image filter, represented as a transformation value.
///
/// Filters are cheap to clone and share; applying one has no side effects.
#[derive(Clone)]
pub struct Filter {
    run: Rc<dyn Fn(&Image) -> Result<Image>>,
}

impl Filter {
    /// Lift an arbitrary image transformation into a filter.
    pub fn new(run: impl Fn(&Image) -> Result<Image> + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// The unit of sequencing: returns a copy of its input.
    pub fn identity() -> Self {
        Self::new(|image| Ok(image.clone()))
    }

    /// Apply the filter, producing a new image.
    pub fn apply(&self, image: &Image) -> Result<Image> {
        (self.run)(image)
    }

    /// Sequence two filters left to right: `self` first, then `next`.
    pub fn then(self, next: Filter) -> Filter {
        Filter::new(move |image| next.apply(&self.apply(image)?))
    }
}

/// Gaussian blur of the given radius.
pub fn blur(radius: f64) -> Filter {
    Filter::new(move |image| {
        let params = EffectParams::new()
            .with("input", Param::Image(image.clone()))
            .with("radius", Param::Float(radius));
        effects::invoke("gaussian-blur", &params)
    })
}

/// A filter producing a flat image of `colour`.
///
/// The input's pixels are ignored entirely; only its extent is used, since
/// raster buffers need a finite canvas. Use a colour with alpha below 255 —
/// compositing an opaque layer hides everything underneath. That is a usage
/// contract, not a runtime check.
pub fn colour_generator(colour: Colour) -> Filter {
    Filter::new(move |image| {
        let params = EffectParams::new()
            .with("colour", Param::Colour(colour))
            .with("width", Param::Int(i64::from(image.width())))
            .with("height", Param::Int(i64::from(image.height())));
        effects::invoke("constant-colour", &params)
    })
}

/// Composite the captured `overlay` over the input.
///
/// Standard source-over alpha blending; the result is cropped to the
/// input's extent and never grows beyond it.
pub fn composite_source_over(overlay: Image) -> Filter {
    Filter::new(move |image| {
        let params = EffectParams::new()
            .with("background", Param::Image(image.clone()))
            .with("overlay", Param::Image(overlay.clone()));
        effects::invoke("source-over", &params)
    })
}

/// Tint the input by compositing a flat `colour` layer over it.
pub fn colour_overlay(colour: Colour) -> Filter {
    Filter::new(move |image| {
        let overlay = colour_generator(colour).apply(image)?;
        composite_source_over(overlay).apply(image)
    })
}
