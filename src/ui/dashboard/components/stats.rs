//! Class statistics panel
//!
//! Renders the server-computed class average and per-subject averages

use super::super::state::DashboardState;
use super::super::utils::{format_average, subject_label};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_stats_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    match &state.statistics {
        Some(stats) => {
            lines.push(Line::from(vec![
                Span::styled("Class average: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format_average(stats.class_average),
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            for (i, average) in stats.subject_averages.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", subject_label(i)),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(format_average(*average), Style::default().fg(Color::LightCyan)),
                ]));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No statistics yet",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let block = Block::default()
        .title("CLASS STATISTICS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
