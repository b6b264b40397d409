//! Status bar rendering with keybindings and playback indicators

use crate::model::TraceStats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub cursor: usize,
    pub total: usize,
    pub stats: TraceStats,
    pub is_playing: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData<'_>) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let line_bg = DEFAULT_THEME.current_line_bg;

    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", data.cursor, data.total),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " cmp {} · writes {} ",
                data.stats.comparisons, data.stats.writes
            ),
            Style::default().bg(line_bg).fg(DEFAULT_THEME.comment),
        ),
        Span::styled(" | ", Style::default().bg(line_bg).fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!(" {} ", data.message),
            Style::default().bg(line_bg).fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default().bg(line_bg).fg(DEFAULT_THEME.fg);
    let sep_style = Style::default().bg(line_bg).fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (key, desc) in [
        (" ←/→ ", " step "),
        (" ⎵ ", " play "),
        (" ⌫/↵ ", " start/end "),
        (" a ", " algo "),
        (" n ", " new "),
        (" [ ] ", " size "),
        (" +/- ", " speed "),
        (" q ", " quit "),
    ] {
        if !right_spans.is_empty() {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let indicator = if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if data.total > 0 && data.cursor >= data.total {
        Some((" END ", DEFAULT_THEME.error))
    } else if data.cursor == 0 {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };

    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
