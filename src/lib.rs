//! Path-constraint solver for 2D skeletal animation.
//!
//! Given a target path (a sequence of connected cubic Bezier curves, possibly
//! closed), the constraint repositions, reorients, and rescales a chain of
//! rigid bones so they track that path according to configurable spacing,
//! positioning, and rotation rules.
//!
//! The crate is runtime-agnostic: bones and path geometry stay owned by the
//! embedding skeleton runtime and are reached through the [`ConstrainedBone`]
//! and [`PathTarget`] seams. [`Bone`] and [`StaticPath`] are minimal
//! implementations for embedders without a full runtime.

#![forbid(unsafe_code)]

mod bone;
mod constraint;
mod error;
mod model;
mod path;

pub use bone::*;
pub use constraint::*;
pub use error::*;
pub use model::*;
pub use path::*;


#[cfg(test)]
mod curve_sampler_tests;
