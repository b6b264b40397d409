//! Trace generators
//!
//! Each generator runs a classical sort over a private copy of the input and
//! records a [`Step`](crate::model::Step) at every meaningful event:
//! - a comparison of two positions (`comparing`)
//! - a swap or merge write, recorded before the move and again once it has landed
//! - a position becoming final (`sorted` grows, never shrinks)
//!
//! The shared bookkeeping lives in [`recorder`]; the four algorithms are
//! [`bubble`], [`insertion`], [`quick`] and [`merge`], and [`registry`] maps an
//! [`Algorithm`] to its generator.
//!
//! Every trace ends on a step with all positions sorted and no highlights. An
//! empty input yields exactly one (empty) step.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod recorder;
pub mod registry;

pub use registry::{generate, generate_by_id, Algorithm};

use crate::model::{Element, Trace};

/// A sorting algorithm that can record itself.
///
/// Implementations must be pure: the same input order always produces the same
/// trace, and `initial` is never modified.
pub trait TraceGenerator: Sync {
    fn generate(&self, initial: &[Element]) -> Trace;
}
