//! Editor panel
//!
//! Renders the grade and attendance forms for the selected student. The
//! fields hold raw strings so partial or invalid typing stays visible until
//! submit.

use super::super::state::{DashboardState, Focus};
use crate::consts::cli_consts::SUBJECT_COUNT;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_editor_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let Some(name) = state.selected.as_deref() else {
        let hint = Paragraph::new("Select a student (Enter on the list) to edit grades and attendance")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title("EDITOR")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(1)),
            );
        f.render_widget(hint, area);
        return;
    };

    let mut lines = Vec::new();

    // Server-stored values for the selected row, resolved against the
    // latest snapshot; unsaved edits live in the fields below.
    if let Some(student) = state.selected_student() {
        lines.push(Line::from(Span::styled(
            format!(
                "Stored: average {:.2}, attendance {:.1}%",
                student.average, student.attendance
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(Span::styled(
        "Grades (0 to 10), Enter saves all five:",
        Style::default().fg(Color::Gray),
    )));

    let mut grade_spans = Vec::new();
    for i in 0..SUBJECT_COUNT {
        grade_spans.push(Span::styled(
            format!(" {} ", i + 1),
            Style::default().fg(Color::DarkGray),
        ));
        grade_spans.push(field_span(
            &state.grade_inputs[i],
            state.focus == Focus::Grade(i),
        ));
    }
    lines.push(Line::from(grade_spans));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Attendance (0 to 100%): ", Style::default().fg(Color::Gray)),
        field_span(&state.attendance_input, state.focus == Focus::Attendance),
    ]));

    let block = Block::default()
        .title(format!("EDITING: {}", name))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightGreen))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// One editable field, rendered wide enough to click with the eye; the
/// focused field gets a background and a block cursor.
fn field_span(value: &str, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(
            format!("[{:<5}█]", value),
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(30, 40, 50))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!("[{:<6}]", value), Style::default().fg(Color::White))
    }
}
