//! Dashboard main renderer

use super::components::{attention, confirm, editor, footer, header, logs, roster, stats};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);

    roster::render_roster_panel(f, content_chunks[0], state);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Fill(1),
            Constraint::Length(9),
        ])
        .split(content_chunks[1]);

    stats::render_stats_panel(f, right_chunks[0], state);
    attention::render_attention_panel(f, right_chunks[1], state);
    editor::render_editor_panel(f, right_chunks[2], state);

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);

    // Confirmation overlay sits on top of everything else.
    if state.confirm_remove.is_some() {
        confirm::render_confirm_overlay(f, state);
    }
}
