//! Attention panel
//!
//! Renders the backend's list of students needing intervention, with the
//! free-text reasons it supplies. The client only displays this data.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_attention_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    if state.attention.is_empty() {
        lines.push(Line::from(Span::styled(
            "No students flagged",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for entry in &state.attention {
        lines.push(Line::from(Span::styled(
            entry.name.clone(),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )));
        for reason in &entry.reasons {
            lines.push(Line::from(Span::styled(
                format!("  - {}", reason),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let block = Block::default()
        .title("NEEDS ATTENTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
