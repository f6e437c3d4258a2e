//! Dashboard header component
//!
//! Renders the title bar and the transient status banner

use super::super::state::DashboardState;
use super::super::utils::kind_color;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the title and the status line under it.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("CLASS DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Status banner: the transient message wins; otherwise show where we are
    // connected and for how long.
    let (text, color) = match &state.status {
        Some(status) => (status.text.clone(), kind_color(status.kind)),
        None if state.loading => ("Loading class data...".to_string(), Color::DarkGray),
        None => {
            let uptime = state.start_time.elapsed();
            (
                format!(
                    "{} ({}) | up {}m {}s",
                    state.environment,
                    state.environment.base_url(),
                    uptime.as_secs() / 60,
                    uptime.as_secs() % 60
                ),
                Color::DarkGray,
            )
        }
    };

    let banner = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(banner, header_chunks[1]);
}
