//! Dashboard state transitions
//!
//! All methods here are pure with respect to I/O: they take the current
//! state plus an action or worker event, mutate the state, and return the
//! commands the runtime should execute. Nothing in this module touches the
//! network or the terminal.

use super::state::{Action, DashboardState, Focus, StatusMessage};
use crate::error_classifier::ErrorClassifier;
use crate::events::{ActivityEntry, Command, Event, EventKind, Failure, MutationKind, Snapshot};
use crate::validate::{format_score, parse_attendance, parse_grades, validate_name};

impl DashboardState {
    /// Apply a user action. Returns the commands to dispatch.
    pub fn on_action(&mut self, action: Action) -> Vec<Command> {
        // While the confirmation overlay is open, only its own actions apply.
        if self.confirm_remove.is_some() {
            return match action {
                Action::ConfirmRemove => self.confirm_removal(),
                Action::CancelRemove => {
                    self.confirm_remove = None;
                    Vec::new()
                }
                _ => Vec::new(),
            };
        }

        match action {
            Action::FocusNext => {
                self.focus = next_focus(self.focus, self.selected.is_some());
                Vec::new()
            }
            Action::FocusPrev => {
                self.focus = prev_focus(self.focus, self.selected.is_some());
                Vec::new()
            }
            Action::FocusRoster => {
                self.focus = Focus::Roster;
                Vec::new()
            }
            Action::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                Vec::new()
            }
            Action::CursorDown => {
                if self.cursor + 1 < self.students.len() {
                    self.cursor += 1;
                }
                Vec::new()
            }
            Action::Submit => match self.focus {
                Focus::Roster => {
                    self.select_under_cursor();
                    Vec::new()
                }
                Focus::NameInput => self.submit_new_student(),
                Focus::Grade(_) => self.submit_grades(),
                Focus::Attendance => self.submit_attendance(),
            },
            Action::InputChar(c) => {
                if let Some(buffer) = self.focused_input() {
                    buffer.push(c);
                }
                Vec::new()
            }
            Action::Backspace => {
                if let Some(buffer) = self.focused_input() {
                    buffer.pop();
                }
                Vec::new()
            }
            Action::RequestRemove => {
                if self.focus == Focus::Roster {
                    self.confirm_remove = self.student_under_cursor().map(|s| s.name.clone());
                }
                Vec::new()
            }
            Action::ConfirmRemove | Action::CancelRemove => Vec::new(),
            Action::Refresh => vec![Command::Load],
        }
    }

    /// Apply a worker event. Returns the commands to dispatch.
    pub fn on_event(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Snapshot(snapshot) => {
                self.apply_snapshot(snapshot);
                self.push_activity(ActivityEntry::info("Class data refreshed"));
                Vec::new()
            }
            Event::LoadFailed => {
                self.loading = false;
                self.push_activity(ActivityEntry::error(
                    "Backend unreachable, keeping last known data",
                    ErrorClassifier::new().classify_failure(&Failure::Unreachable),
                ));
                vec![self.show_status(EventKind::Error, "Backend unreachable")]
            }
            Event::MutationOutcome {
                kind,
                result: Ok(()),
            } => {
                match kind {
                    MutationKind::AddStudent => self.name_input.clear(),
                    MutationKind::RemoveStudent => {
                        self.selected = None;
                        // The editor disappears with the selection.
                        if matches!(self.focus, Focus::Grade(_) | Focus::Attendance) {
                            self.focus = Focus::Roster;
                        }
                    }
                    _ => {}
                }
                let text = success_text(kind);
                self.push_activity(ActivityEntry::success(text));
                vec![self.show_status(EventKind::Success, text)]
            }
            Event::MutationOutcome {
                kind,
                result: Err(failure),
            } => {
                let text = failure_text(kind, &failure);
                self.push_activity(ActivityEntry::error(
                    text.clone(),
                    ErrorClassifier::new().classify_failure(&failure),
                ));
                vec![self.show_status(EventKind::Error, text)]
            }
            // Unconditional: a clear scheduled by an older message may take
            // down a newer one early. Accepted race, matching the fixed
            // per-message timer contract.
            Event::StatusClearElapsed => {
                self.status = None;
                Vec::new()
            }
        }
    }

    /// Show a transient status banner and schedule its independent clear.
    fn show_status(&mut self, kind: EventKind, text: impl Into<String>) -> Command {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
        Command::ScheduleStatusClear
    }

    /// Replace view-state slices from a completed read. Slices the backend
    /// did not answer successfully stay untouched. Unsaved form edits
    /// survive the refresh.
    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.loading = false;
        if let Some(students) = snapshot.students {
            self.students = students;
            if self.cursor >= self.students.len() {
                self.cursor = self.students.len().saturating_sub(1);
            }
        }
        if let Some(statistics) = snapshot.statistics {
            self.statistics = Some(statistics);
        }
        if let Some(attention) = snapshot.attention {
            self.attention = attention;
        }
    }

    /// Copy the cursored student's stored values into the editable fields.
    fn select_under_cursor(&mut self) {
        let Some(student) = self.student_under_cursor().cloned() else {
            return;
        };
        for input in self.grade_inputs.iter_mut() {
            input.clear();
        }
        for (input, grade) in self.grade_inputs.iter_mut().zip(&student.grades) {
            *input = format_score(*grade);
        }
        self.attendance_input = format_score(student.attendance);
        self.selected = Some(student.name);
    }

    fn submit_new_student(&mut self) -> Vec<Command> {
        match validate_name(&self.name_input) {
            Err(error) => vec![self.show_status(EventKind::Error, error.to_string())],
            Ok(()) => vec![Command::Add {
                name: self.name_input.clone(),
            }],
        }
    }

    fn submit_grades(&mut self) -> Vec<Command> {
        // No-op without a selection.
        let Some(name) = self.selected.clone() else {
            return Vec::new();
        };
        match parse_grades(&self.grade_inputs) {
            Err(error) => vec![self.show_status(EventKind::Error, error.to_string())],
            Ok(grades) => vec![Command::SaveGrades { name, grades }],
        }
    }

    fn submit_attendance(&mut self) -> Vec<Command> {
        let Some(name) = self.selected.clone() else {
            return Vec::new();
        };
        match parse_attendance(&self.attendance_input) {
            Err(error) => vec![self.show_status(EventKind::Error, error.to_string())],
            Ok(value) => vec![Command::SaveAttendance { name, value }],
        }
    }

    fn confirm_removal(&mut self) -> Vec<Command> {
        match self.confirm_remove.take() {
            Some(name) => vec![Command::Remove { name }],
            None => Vec::new(),
        }
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Roster => None,
            Focus::NameInput => Some(&mut self.name_input),
            Focus::Grade(i) => self.grade_inputs.get_mut(i),
            Focus::Attendance => Some(&mut self.attendance_input),
        }
    }
}

/// Focus ring: roster -> name input -> (editor fields when a student is
/// selected) -> back to roster.
fn next_focus(focus: Focus, has_selection: bool) -> Focus {
    match focus {
        Focus::Roster => Focus::NameInput,
        Focus::NameInput if has_selection => Focus::Grade(0),
        Focus::NameInput => Focus::Roster,
        Focus::Grade(i) if i + 1 < crate::consts::cli_consts::SUBJECT_COUNT => Focus::Grade(i + 1),
        Focus::Grade(_) => Focus::Attendance,
        Focus::Attendance => Focus::Roster,
    }
}

fn prev_focus(focus: Focus, has_selection: bool) -> Focus {
    match focus {
        Focus::Roster if has_selection => Focus::Attendance,
        Focus::Roster => Focus::NameInput,
        Focus::NameInput => Focus::Roster,
        Focus::Grade(0) => Focus::NameInput,
        Focus::Grade(i) => Focus::Grade(i - 1),
        Focus::Attendance => Focus::Grade(crate::consts::cli_consts::SUBJECT_COUNT - 1),
    }
}

fn success_text(kind: MutationKind) -> &'static str {
    match kind {
        MutationKind::AddStudent => "Student added",
        MutationKind::RemoveStudent => "Student removed",
        MutationKind::UpdateGrades => "Grades saved",
        MutationKind::UpdateAttendance => "Attendance saved",
    }
}

fn failure_text(kind: MutationKind, failure: &Failure) -> String {
    match failure {
        Failure::Unreachable => "Could not reach the backend".to_string(),
        Failure::Rejected(message) if !message.is_empty() => message.clone(),
        Failure::Rejected(_) => match kind {
            MutationKind::AddStudent => "Could not add the student".to_string(),
            MutationKind::RemoveStudent => "Could not remove the student".to_string(),
            MutationKind::UpdateGrades => "Could not save the grades".to_string(),
            MutationKind::UpdateAttendance => "Could not save the attendance".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::models::Student;

    fn student(name: &str, grades: [f64; 5], attendance: f64) -> Student {
        Student {
            name: name.to_string(),
            grades: grades.to_vec(),
            attendance,
            average: grades.iter().sum::<f64>() / grades.len() as f64,
        }
    }

    fn state_with_students(students: Vec<Student>) -> DashboardState {
        let mut state = DashboardState::new(Environment::Local);
        state.on_event(Event::Snapshot(Snapshot {
            students: Some(students),
            statistics: None,
            attention: Some(vec![]),
        }));
        state
    }

    fn type_into(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            state.on_action(Action::InputChar(c));
        }
    }

    #[test]
    /// A blank or whitespace-only name never produces a network command.
    fn blank_name_is_rejected_without_network_command() {
        let mut state = state_with_students(vec![]);
        state.focus = Focus::NameInput;
        type_into(&mut state, "   ");

        let commands = state.on_action(Action::Submit);

        assert_eq!(commands, vec![Command::ScheduleStatusClear]);
        let status = state.status.unwrap();
        assert_eq!(status.kind, EventKind::Error);
        assert_eq!(status.text, "Enter the student name");
    }

    #[test]
    fn valid_name_submits_add_command() {
        let mut state = state_with_students(vec![]);
        state.focus = Focus::NameInput;
        type_into(&mut state, "Ana");

        let commands = state.on_action(Action::Submit);

        assert_eq!(
            commands,
            vec![Command::Add {
                name: "Ana".to_string()
            }]
        );
    }

    #[test]
    /// Selecting a student pre-fills the editable fields with its stored
    /// values rendered as short strings.
    fn selection_prefills_edit_fields() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);

        state.on_action(Action::Submit); // roster focus: select under cursor

        assert_eq!(state.selected.as_deref(), Some("Ana"));
        assert_eq!(state.grade_inputs, ["7", "8", "6", "9", "5"]);
        assert_eq!(state.attendance_input, "80");
    }

    #[test]
    /// Any grade outside [0, 10] rejects the submission client-side.
    fn out_of_range_grade_is_rejected_before_network() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);
        state.on_action(Action::Submit);
        state.grade_inputs[1] = "11".to_string();
        state.focus = Focus::Grade(1);

        let commands = state.on_action(Action::Submit);

        assert_eq!(commands, vec![Command::ScheduleStatusClear]);
        assert_eq!(state.status.unwrap().text, "Grades must be between 0 and 10");
    }

    #[test]
    /// Non-numeric grade input counts as zero and passes validation.
    fn non_numeric_grade_is_zeroed_and_submitted() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);
        state.on_action(Action::Submit);
        state.grade_inputs[2] = "abc".to_string();
        state.focus = Focus::Grade(2);

        let commands = state.on_action(Action::Submit);

        assert_eq!(
            commands,
            vec![Command::SaveGrades {
                name: "Ana".to_string(),
                grades: vec![7.0, 8.0, 0.0, 9.0, 5.0],
            }]
        );
    }

    #[test]
    /// Attendance outside [0, 100] or non-numeric is rejected client-side.
    fn invalid_attendance_is_rejected_before_network() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);
        state.on_action(Action::Submit);
        state.focus = Focus::Attendance;

        for bad in ["abc", "101", "-1"] {
            state.attendance_input = bad.to_string();
            let commands = state.on_action(Action::Submit);
            assert_eq!(commands, vec![Command::ScheduleStatusClear], "input {bad:?}");
            assert_eq!(
                state.status.take().unwrap().text,
                "Attendance must be between 0 and 100"
            );
        }
    }

    #[test]
    /// Grade and attendance submissions are no-ops without a selection.
    fn edits_without_selection_are_noops() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);
        state.focus = Focus::Grade(0);
        assert!(state.on_action(Action::Submit).is_empty());

        state.focus = Focus::Attendance;
        state.attendance_input = "80".to_string();
        assert!(state.on_action(Action::Submit).is_empty());
    }

    #[test]
    /// Declining the confirmation overlay issues no removal command.
    fn cancelled_removal_sends_nothing() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);

        assert!(state.on_action(Action::RequestRemove).is_empty());
        assert_eq!(state.confirm_remove.as_deref(), Some("Ana"));

        let commands = state.on_action(Action::CancelRemove);
        assert!(commands.is_empty());
        assert!(state.confirm_remove.is_none());
    }

    #[test]
    fn confirmed_removal_sends_delete_command() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);
        state.on_action(Action::RequestRemove);

        let commands = state.on_action(Action::ConfirmRemove);

        assert_eq!(
            commands,
            vec![Command::Remove {
                name: "Ana".to_string()
            }]
        );
        assert!(state.confirm_remove.is_none());
    }

    #[test]
    /// While the overlay is open, other actions are swallowed.
    fn overlay_blocks_other_actions() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);
        state.on_action(Action::RequestRemove);

        assert!(state.on_action(Action::Refresh).is_empty());
        assert_eq!(state.confirm_remove.as_deref(), Some("Ana"));
    }

    #[test]
    /// A successful removal clears the current selection.
    fn removal_success_clears_selection() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);
        state.on_action(Action::Submit);
        assert!(state.selected.is_some());

        state.on_event(Event::MutationOutcome {
            kind: MutationKind::RemoveStudent,
            result: Ok(()),
        });

        assert!(state.selected.is_none());
        assert_eq!(state.status.unwrap().text, "Student removed");
    }

    #[test]
    /// A successful add clears the name field for the next entry.
    fn add_success_clears_name_input() {
        let mut state = state_with_students(vec![]);
        state.name_input = "Ana".to_string();

        let commands = state.on_event(Event::MutationOutcome {
            kind: MutationKind::AddStudent,
            result: Ok(()),
        });

        assert!(state.name_input.is_empty());
        assert_eq!(commands, vec![Command::ScheduleStatusClear]);
        let status = state.status.unwrap();
        assert_eq!(status.kind, EventKind::Success);
    }

    #[test]
    /// The server's rejection message is surfaced verbatim.
    fn rejection_message_is_shown() {
        let mut state = state_with_students(vec![]);

        state.on_event(Event::MutationOutcome {
            kind: MutationKind::AddStudent,
            result: Err(Failure::Rejected("Aluno já existe".to_string())),
        });

        assert_eq!(state.status.unwrap().text, "Aluno já existe");
    }

    #[test]
    /// Snapshots replace slices wholesale; missing slices stay untouched.
    fn snapshot_replaces_present_slices_only() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);

        state.on_event(Event::Snapshot(Snapshot {
            students: None,
            statistics: Some(crate::models::ClassStatistics {
                class_average: 7.0,
                subject_averages: vec![7.0; 5],
            }),
            attention: None,
        }));

        assert_eq!(state.students.len(), 1, "students slice must stay");
        assert!(state.statistics.is_some());
    }

    #[test]
    /// A failed reload leaves prior data untouched and raises the banner.
    fn load_failure_keeps_prior_state() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);

        let commands = state.on_event(Event::LoadFailed);

        assert_eq!(state.students.len(), 1);
        assert_eq!(commands, vec![Command::ScheduleStatusClear]);
        assert_eq!(state.status.unwrap().text, "Backend unreachable");
    }

    #[test]
    /// The scheduled clear wipes whatever status is current, even a newer
    /// one — the documented per-message timer race.
    fn status_clear_is_unconditional() {
        let mut state = state_with_students(vec![]);
        state.focus = Focus::NameInput;
        state.on_action(Action::Submit); // first error message
        state.name_input = "Ana".to_string();

        state.on_event(Event::MutationOutcome {
            kind: MutationKind::AddStudent,
            result: Ok(()),
        }); // newer message

        state.on_event(Event::StatusClearElapsed);
        assert!(state.status.is_none());
    }

    #[test]
    /// Tab walks roster -> name -> grades -> attendance -> roster when a
    /// student is selected, and skips the editor otherwise.
    fn focus_ring_respects_selection() {
        let mut state = state_with_students(vec![student("Ana", [7.0, 8.0, 6.0, 9.0, 5.0], 80.0)]);

        state.on_action(Action::FocusNext);
        assert_eq!(state.focus, Focus::NameInput);
        state.on_action(Action::FocusNext);
        assert_eq!(state.focus, Focus::Roster, "no selection: editor skipped");

        state.on_action(Action::Submit); // select
        state.on_action(Action::FocusNext);
        state.on_action(Action::FocusNext);
        assert_eq!(state.focus, Focus::Grade(0));
        for _ in 0..5 {
            state.on_action(Action::FocusNext);
        }
        assert_eq!(state.focus, Focus::Attendance);
        state.on_action(Action::FocusNext);
        assert_eq!(state.focus, Focus::Roster);
    }
}
