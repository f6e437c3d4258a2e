//! Command execution runtime
//!
//! Runs dashboard commands against the backend on spawned tasks and feeds
//! the results back to the UI loop over the event channel. Overlapping
//! commands are allowed; completion order is unspecified.

use crate::backend::ClassApi;
use crate::backend::error::ApiError;
use crate::consts::cli_consts::status;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{Command, Event, Failure, MutationKind, Snapshot};
use log::{error, warn};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct CommandRunner {
    api: Arc<dyn ClassApi>,
    events: mpsc::Sender<Event>,
}

impl CommandRunner {
    pub fn new(api: Arc<dyn ClassApi>, events: mpsc::Sender<Event>) -> Self {
        Self { api, events }
    }

    /// Execute a command on its own task.
    pub fn dispatch(&self, command: Command) {
        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            run_command(api.as_ref(), &events, command).await;
        });
    }
}

async fn run_command(api: &dyn ClassApi, events: &mpsc::Sender<Event>, command: Command) {
    match command {
        Command::Load => {
            let event = load_event(api).await;
            let _ = events.send(event).await;
        }
        Command::Add { name } => {
            let result = api.add_student(&name).await;
            finish_mutation(api, events, MutationKind::AddStudent, result).await;
        }
        Command::Remove { name } => {
            let result = api.remove_student(&name).await;
            finish_mutation(api, events, MutationKind::RemoveStudent, result).await;
        }
        Command::SaveGrades { name, grades } => {
            let result = api.update_grades(&name, grades).await;
            finish_mutation(api, events, MutationKind::UpdateGrades, result).await;
        }
        Command::SaveAttendance { name, value } => {
            let result = api.update_attendance(&name, value).await;
            finish_mutation(api, events, MutationKind::UpdateAttendance, result).await;
        }
        Command::ScheduleStatusClear => {
            // Each scheduled clear is independent and fires unconditionally.
            tokio::time::sleep(status::message_ttl()).await;
            let _ = events.send(Event::StatusClearElapsed).await;
        }
    }
}

/// After a successful mutation the three read endpoints are re-queried
/// exactly once, and the refreshed snapshot is delivered before the
/// mutation's own outcome. Failed mutations skip the reload.
async fn finish_mutation(
    api: &dyn ClassApi,
    events: &mpsc::Sender<Event>,
    kind: MutationKind,
    result: Result<(), ApiError>,
) {
    match result {
        Ok(()) => {
            let event = load_event(api).await;
            let _ = events.send(event).await;
            let _ = events
                .send(Event::MutationOutcome {
                    kind,
                    result: Ok(()),
                })
                .await;
        }
        Err(failure) => {
            match ErrorClassifier::new().classify_api_error(&failure) {
                LogLevel::Error => error!("{} failed: {}", kind, failure),
                _ => warn!("{} failed: {}", kind, failure),
            }
            let _ = events
                .send(Event::MutationOutcome {
                    kind,
                    result: Err(to_failure(failure)),
                })
                .await;
        }
    }
}

/// Fetch the three read endpoints concurrently and fold them into one
/// event. A connectivity failure on any of them discards the whole read;
/// a rejected response only leaves its own slice untouched.
async fn load_event(api: &dyn ClassApi) -> Event {
    let (students, statistics, attention) = tokio::join!(
        api.list_students(),
        api.class_statistics(),
        api.attention_report(),
    );

    let snapshot: Result<Snapshot, ()> = (|| {
        Ok(Snapshot {
            students: slice(students)?,
            statistics: slice(statistics)?,
            attention: slice(attention)?.map(|report| report.students),
        })
    })();

    match snapshot {
        Ok(snapshot) => Event::Snapshot(snapshot),
        Err(()) => {
            warn!(
                "reload failed: backend at {} unreachable",
                api.environment().base_url()
            );
            Event::LoadFailed
        }
    }
}

fn slice<T>(result: Result<T, ApiError>) -> Result<Option<T>, ()> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) if error.is_connectivity() => Err(()),
        // Rejected read (e.g. the backend's 404 for an empty class): the
        // previously displayed value stays.
        Err(_) => Ok(None),
    }
}

fn to_failure(error: ApiError) -> Failure {
    match error {
        ApiError::Reqwest(_) => Failure::Unreachable,
        ApiError::Http { message, .. } => Failure::Rejected(message),
    }
}
