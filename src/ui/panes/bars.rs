//! Bar chart of the current display state

use crate::factory::MAX_VALUE;
use crate::playback::DisplayState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Role of a bar, in priority order (a swapping bar is never drawn as sorted)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Swapping,
    Comparing,
    Sorted,
    Plain,
}

impl BarRole {
    pub fn color(self) -> Color {
        match self {
            BarRole::Swapping => DEFAULT_THEME.swapping,
            BarRole::Comparing => DEFAULT_THEME.comparing,
            BarRole::Sorted => DEFAULT_THEME.sorted,
            BarRole::Plain => DEFAULT_THEME.bar,
        }
    }
}

/// Index-role lookup built once per frame
pub struct RoleMap {
    comparing: FxHashSet<usize>,
    swapping: FxHashSet<usize>,
    sorted: FxHashSet<usize>,
}

impl RoleMap {
    pub fn new(display: &DisplayState<'_>) -> Self {
        RoleMap {
            comparing: display.comparing.iter().copied().collect(),
            swapping: display.swapping.iter().copied().collect(),
            sorted: display.sorted.iter().copied().collect(),
        }
    }

    pub fn role(&self, index: usize) -> BarRole {
        if self.swapping.contains(&index) {
            BarRole::Swapping
        } else if self.comparing.contains(&index) {
            BarRole::Comparing
        } else if self.sorted.contains(&index) {
            BarRole::Sorted
        } else {
            BarRole::Plain
        }
    }
}

/// Width and gap that fit `count` bars into `width` columns
fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    let gap = if width >= count.saturating_mul(2) { 1 } else { 0 };
    let usable = width.saturating_sub(gap * count.saturating_sub(1));
    ((usable / count).max(1), gap)
}

/// Render the array pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    display: Option<&DisplayState<'_>>,
    title: &str,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let Some(display) = display.filter(|d| !d.array.is_empty()) else {
        let paragraph = Paragraph::new("(no array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let roles = RoleMap::new(display);
    let bars: Vec<Bar> = display
        .array
        .iter()
        .enumerate()
        .map(|(idx, element)| {
            Bar::default()
                .value(u64::from(element.value()))
                .text_value(String::new())
                .style(Style::default().fg(roles.role(idx).color()))
        })
        .collect();

    let (bar_width, bar_gap) = bar_geometry(area.width.saturating_sub(2), bars.len());
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(u64::from(MAX_VALUE));

    frame.render_widget(chart, area);
}
