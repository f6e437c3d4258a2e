//! Event System
//!
//! Messages exchanged between backend workers and the view state, plus the
//! commands the view state asks the runtime to execute.

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use crate::models::{AttentionStudent, ClassStatistics, Student};
use chrono::Local;
use std::fmt::Display;

/// Result of one full backend read. Each slice is present when its endpoint
/// answered with success; a missing slice leaves the previously displayed
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub students: Option<Vec<Student>>,
    pub statistics: Option<ClassStatistics>,
    pub attention: Option<Vec<AttentionStudent>>,
}

/// The mutations the dashboard can request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum MutationKind {
    AddStudent,
    RemoveStudent,
    UpdateGrades,
    UpdateAttendance,
}

/// Clone-friendly projection of `ApiError` for transport over the event
/// channel.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Failure {
    /// The request never reached the backend.
    Unreachable,
    /// The backend answered with a rejection message.
    Rejected(String),
}

/// Messages from async workers into the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A full reload finished. Slices replace view state wholesale.
    Snapshot(Snapshot),
    /// A full reload failed on connectivity; nothing was merged.
    LoadFailed,
    /// A mutation finished. For successful mutations this arrives after the
    /// follow-up reload's event.
    MutationOutcome {
        kind: MutationKind,
        result: Result<(), Failure>,
    },
    /// A status message's lifetime elapsed. Clears unconditionally.
    StatusClearElapsed,
}

/// Effects the view state asks the runtime to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Re-fetch the three read endpoints concurrently.
    Load,
    Add {
        name: String,
    },
    Remove {
        name: String,
    },
    SaveGrades {
        name: String,
        grades: Vec<f64>,
    },
    SaveAttendance {
        name: String,
        value: f64,
    },
    /// Arrange for `StatusClearElapsed` after the message TTL.
    ScheduleStatusClear,
}

/// Severity tag for status messages and activity entries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventKind {
    Success,
    Error,
    Info,
}

/// One line in the dashboard activity log.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub msg: String,
    pub timestamp: String,
    pub kind: EventKind,
    pub log_level: LogLevel,
}

impl ActivityEntry {
    fn new(kind: EventKind, msg: String, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            kind,
            log_level,
        }
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::new(EventKind::Success, msg.into(), LogLevel::Info)
    }

    pub fn error(msg: impl Into<String>, log_level: LogLevel) -> Self {
        Self::new(EventKind::Error, msg.into(), log_level)
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self::new(EventKind::Info, msg.into(), LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show successes and info-level entries
        if self.kind == EventKind::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for ActivityEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.kind, self.timestamp, self.msg)
    }
}
