//! Dashboard state management
//!
//! Contains the dashboard view-state struct and related enums. The state is
//! a plain value: transitions live in `updaters.rs` and never perform I/O,
//! so the whole dashboard behavior is testable without a terminal or a
//! backend.

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, SUBJECT_COUNT};
use crate::environment::Environment;
use crate::events::{ActivityEntry, Command, EventKind};
use crate::models::{AttentionStudent, ClassStatistics, Student};

use std::collections::VecDeque;
use std::time::Instant;

/// Which widget currently receives typed input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Focus {
    /// The student list; navigation keys apply.
    Roster,
    /// The new-student name field.
    NameInput,
    /// One of the five grade fields in the editor.
    Grade(usize),
    /// The attendance field in the editor.
    Attendance,
}

/// Transient banner shown under the title, with a severity tag.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: EventKind,
}

/// Semantic user input, decoded from raw key events by the app loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Move focus to the next widget (Tab).
    FocusNext,
    /// Move focus to the previous widget (Shift-Tab).
    FocusPrev,
    /// Leave an input field back to the roster (Esc).
    FocusRoster,
    CursorUp,
    CursorDown,
    /// Enter: select on the roster, submit on a form field.
    Submit,
    InputChar(char),
    Backspace,
    /// Ask to remove the student under the cursor.
    RequestRemove,
    ConfirmRemove,
    CancelRemove,
    /// Manual reload of all three read endpoints.
    Refresh,
}

/// The dashboard view state: the last successful fetch plus in-progress,
/// unsaved form edits. Rebuilt wholesale from snapshots, never patched
/// incrementally.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Student list from the last applied snapshot.
    pub students: Vec<Student>,
    /// Class statistics, absent until the backend has answered once.
    pub statistics: Option<ClassStatistics>,
    /// Students the backend flagged as needing attention.
    pub attention: Vec<AttentionStudent>,
    /// Roster cursor position.
    pub cursor: usize,
    /// Name of the student open in the editor, if any.
    pub selected: Option<String>,
    /// Which widget receives typed input.
    pub focus: Focus,
    /// New-student name field.
    pub name_input: String,
    /// Editable grade fields; intermediate invalid typing is representable.
    pub grade_inputs: [String; SUBJECT_COUNT],
    /// Editable attendance field.
    pub attendance_input: String,
    /// Transient status banner.
    pub status: Option<StatusMessage>,
    /// Student awaiting removal confirmation, if the overlay is open.
    pub confirm_remove: Option<String>,
    /// Recent activity entries for display.
    pub activity: VecDeque<ActivityEntry>,
    /// True until the first snapshot or load failure arrives.
    pub loading: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            start_time: Instant::now(),
            students: Vec::new(),
            statistics: None,
            attention: Vec::new(),
            cursor: 0,
            selected: None,
            focus: Focus::Roster,
            name_input: String::new(),
            grade_inputs: Default::default(),
            attendance_input: String::new(),
            status: None,
            confirm_remove: None,
            activity: VecDeque::new(),
            loading: true,
        }
    }

    /// Commands to dispatch when the dashboard mounts.
    pub fn initial_commands(&self) -> Vec<Command> {
        vec![Command::Load]
    }

    /// The student under the roster cursor, if the roster is non-empty.
    pub fn student_under_cursor(&self) -> Option<&Student> {
        self.students.get(self.cursor)
    }

    /// The student open in the editor. Resolved by name against the current
    /// roster, so the displayed row reflects the latest snapshot.
    pub fn selected_student(&self) -> Option<&Student> {
        let name = self.selected.as_deref()?;
        self.students.iter().find(|s| s.name == name)
    }

    /// Add an entry to the activity log with size limit
    pub fn push_activity(&mut self, entry: ActivityEntry) {
        if self.activity.len() >= MAX_ACTIVITY_LOGS {
            self.activity.pop_front();
        }
        self.activity.push_back(entry);
    }
}
