//! # Introduction
//!
//! sortscope records a sorting algorithm as a trace of array snapshots and plays
//! that trace back at an adjustable speed. Nothing is sorted live: the whole run
//! is captured up front, and playback just moves a cursor over it.
//!
//! ## Pipeline
//!
//! ```text
//! ArrayFactory → Vec<Element> → TraceGenerator → Trace → Player → DisplayState → TUI
//! ```
//!
//! 1. [`factory`]: random input arrays with stable element ids.
//! 2. [`model`]: [`model::Element`], [`model::Step`] and [`model::Trace`].
//! 3. [`trace`]: bubble, insertion, quick and merge sort generators plus the
//!    [`trace::Algorithm`] registry.
//! 4. [`playback`]: the [`playback::Player`] state machine and speed mapping.
//! 5. [`config`]: command-line options for the terminal front-end.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sortscope::model::elements_from_values;
//! use sortscope::playback::Player;
//! use sortscope::trace::{generate, Algorithm};
//!
//! let trace = generate(Algorithm::Bubble, &elements_from_values(&[5, 3, 8, 1]));
//! let mut player = Player::default();
//! player.load_trace(trace).unwrap();
//! player.seek(player.total());
//!
//! let values: Vec<u32> = player.display().unwrap().array.iter().map(|e| e.value()).collect();
//! assert_eq!(values, vec![1, 3, 5, 8]);
//! ```

pub mod config;
pub mod errors;
pub mod factory;
pub mod model;
pub mod playback;
pub mod trace;
pub mod ui;

pub use errors::{Result, VisualizerError};
