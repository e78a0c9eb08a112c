//! stencil - composable region predicates and image filter pipelines
//!
//! Two small algebras over first-class function values: regions (pure
//! predicates over 2D points, for spatial range checks) and filters
//! (image-to-image transformations over a named raster effect engine).

pub mod cli;
pub mod effects;
pub mod error;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod region;
pub mod types;

pub use effects::{invoke, load_image, save_image, EffectParams, Image, Param};
pub use error::{Result, StencilError};
pub use filter::{blur, colour_generator, colour_overlay, composite_source_over, Filter};
pub use pipeline::{Pipeline, Step};
pub use region::{circle, difference, in_range, intersection, invert, shift, union, Region};
pub use types::{Colour, Point};
