//! Playback engine
//!
//! - [`player`]: the [`Player`] state machine (Idle, Paused, Running) and the
//!   [`DisplayState`] view it exposes
//! - [`speed`]: the [`Speed`] setting and its mapping to a per-step delay
//!
//! The player never modifies the trace it owns; the only thing that moves is the
//! cursor, and it moves only on a tick, a seek, or a single step.

pub mod player;
pub mod speed;

pub use player::{DisplayState, PlaybackState, Player};
pub use speed::Speed;
