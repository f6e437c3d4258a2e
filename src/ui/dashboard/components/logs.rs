//! Dashboard logs panel component
//!
//! Renders recent activity with event formatting

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, kind_color};
use crate::events::EventKind;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the activity panel with the most recent entries first.
pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Account for borders and padding when deciding how many lines fit
    let max_logs = (area.height.saturating_sub(2)) as usize;
    let log_count = if max_logs > 0 { max_logs } else { 1 };

    let log_lines: Vec<Line> = state
        .activity
        .iter()
        .filter(|entry| entry.should_display())
        .rev()
        .take(log_count)
        .map(|entry| {
            let status_icon = match entry.kind {
                EventKind::Success => "+",
                EventKind::Error => "!",
                EventKind::Info => "·",
            };
            let compact_time = format_compact_timestamp(&entry.timestamp);

            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", compact_time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.msg.clone(), Style::default().fg(kind_color(entry.kind))),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Waiting for the first refresh...")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}
