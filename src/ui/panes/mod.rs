//! TUI pane rendering
//!
//! - [`bars`]: the array as a bar chart, coloured by comparing/swapping/sorted role
//! - [`status`]: status bar with step counter, trace statistics and keybindings

pub mod bars;
pub mod status;

pub use bars::render_bars_pane;
pub use status::{render_status_bar, StatusRenderData};
