//! Session setup and initialization

use crate::backend::ApiClient;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::CommandRunner;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Everything the TUI mode needs to run against one backend.
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Executes dashboard commands against the backend
    pub runner: CommandRunner,
    /// The backend environment this session talks to
    pub environment: Environment,
}

/// Wire the API client, the command runner, and the event channel together.
pub fn setup_session(environment: Environment) -> SessionData {
    let api = Arc::new(ApiClient::new(environment.clone()));
    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let runner = CommandRunner::new(api, event_sender);

    SessionData {
        event_receiver,
        runner,
        environment,
    }
}
