//! Data model shared by the trace generators and the player
//!
//! - [`element`]: [`Element`] values with a stable [`ElementId`]
//! - [`step`]: [`Step`] snapshots, the [`Trace`] that owns them, and [`TraceStats`]
//!
//! Every [`Step`] owns its own copy of the array. Nothing in a recorded trace is
//! shared with the working array a generator mutates, so later moves can never
//! rewrite an earlier snapshot.

pub mod element;
pub mod step;

pub use element::{elements_from_values, Element, ElementId};
pub use step::{Step, Trace, TraceStats};
