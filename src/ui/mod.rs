//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, array/algorithm selection
//! - **[`panes`]**: stateless render functions (bar chart, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The UI only reads [`DisplayState`](crate::playback::DisplayState) from the
//! player; it never looks inside a trace directly.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
