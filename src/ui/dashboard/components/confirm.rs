//! Removal confirmation overlay
//!
//! A centered modal asking for confirmation before a DELETE is sent. No
//! request leaves the client until the user answers yes.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

pub fn render_confirm_overlay(f: &mut Frame, state: &DashboardState) {
    let Some(name) = state.confirm_remove.as_deref() else {
        return;
    };

    let area = centered_rect(f.area(), 44, 7);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(format!("Remove {}?", name)),
        Line::from(""),
        Line::from("[Y] Remove    [N] Cancel"),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title("CONFIRM REMOVAL")
                .title_style(
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::LightRed))
                .padding(Padding::uniform(1)),
        );
    f.render_widget(dialog, area);
}

/// A fixed-size rect centered in `area`, clamped to its bounds.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
