//! Roster panel
//!
//! Renders the add-student input and the student list with cursor and
//! selection highlighting.

use super::super::state::{DashboardState, Focus};
use super::super::utils::{format_average, format_percent};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

pub fn render_roster_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    render_name_input(f, chunks[0], state);
    render_student_list(f, chunks[1], state);
}

fn render_name_input(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let focused = state.focus == Focus::NameInput;
    let border_color = if focused { Color::LightGreen } else { Color::DarkGray };

    // Trailing block cursor marks the active input.
    let text = if focused {
        format!("{}█", state.name_input)
    } else if state.name_input.is_empty() {
        "Tab here, type a name, Enter".to_string()
    } else {
        state.name_input.clone()
    };
    let text_color = if focused || !state.name_input.is_empty() {
        Color::White
    } else {
        Color::DarkGray
    };

    let input = Paragraph::new(text)
        .style(Style::default().fg(text_color))
        .block(
            Block::default()
                .title("ADD STUDENT")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(input, area);
}

fn render_student_list(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let items: Vec<ListItem> = state
        .students
        .iter()
        .map(|student| {
            let selected = state.selected.as_deref() == Some(student.name.as_str());
            let marker = if selected { "* " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<18}", student.name), name_style),
                Span::styled(
                    format!(" avg {:>5}", format_average(student.average)),
                    Style::default().fg(Color::LightCyan),
                ),
                Span::styled(
                    format!("  att {:>6}", format_percent(student.attendance)),
                    Style::default().fg(Color::LightBlue),
                ),
            ]))
        })
        .collect();

    let focused = state.focus == Focus::Roster;
    let border_color = if focused { Color::LightGreen } else { Color::Cyan };

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("STUDENTS ({})", state.students.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(30, 40, 50))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.students.is_empty() {
        list_state.select(Some(state.cursor.min(state.students.len() - 1)));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}
