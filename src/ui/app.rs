//! Main application state and UI loop
//!
//! Owns the event-loop glue: key events become semantic actions, worker
//! events flow into the view state, and the resulting commands go back to
//! the runtime. All behavior lives in the state transitions; this file only
//! routes.

use crate::consts::cli_consts::input;
use crate::events::Event as WorkerEvent;
use crate::runtime::CommandRunner;
use crate::ui::dashboard::state::{Action, Focus};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::sync::mpsc;

/// Application state
pub struct App {
    /// The dashboard view state.
    state: DashboardState,
    /// Executes commands against the backend.
    runner: CommandRunner,
    /// Receives events from backend workers.
    event_receiver: mpsc::Receiver<WorkerEvent>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        state: DashboardState,
        runner: CommandRunner,
        event_receiver: mpsc::Receiver<WorkerEvent>,
    ) -> Self {
        Self {
            state,
            runner,
            event_receiver,
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // Initial data load happens on mount; the UI stays interactive while
    // the requests are pending.
    for command in app.state.initial_commands() {
        app.runner.dispatch(command);
    }

    loop {
        // Drain all pending worker events into the view state
        while let Ok(event) = app.event_receiver.try_recv() {
            for command in app.state.on_event(event) {
                app.runner.dispatch(command);
            }
        }

        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(input::poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                if wants_quit(&app.state, key.code) {
                    return Ok(());
                }

                if let Some(action) = decode_key(&app.state, key.code) {
                    for command in app.state.on_action(action) {
                        app.runner.dispatch(command);
                    }
                }
            }
        }
    }
}

/// Quit only applies from the roster with no overlay open, so typed 'q'
/// characters and overlay answers are never swallowed.
fn wants_quit(state: &DashboardState, code: KeyCode) -> bool {
    state.confirm_remove.is_none()
        && state.focus == Focus::Roster
        && matches!(code, KeyCode::Esc | KeyCode::Char('q'))
}

/// Map a key press to a semantic action for the current state.
fn decode_key(state: &DashboardState, code: KeyCode) -> Option<Action> {
    if state.confirm_remove.is_some() {
        return match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmRemove),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CancelRemove),
            _ => None,
        };
    }

    match state.focus {
        Focus::Roster => match code {
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Up => Some(Action::CursorUp),
            KeyCode::Down => Some(Action::CursorDown),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                Some(Action::RequestRemove)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Refresh),
            _ => None,
        },
        Focus::NameInput | Focus::Grade(_) | Focus::Attendance => match code {
            KeyCode::Esc => Some(Action::FocusRoster),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::InputChar(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;

    fn state() -> DashboardState {
        DashboardState::new(Environment::Local)
    }

    #[test]
    /// 'q' quits from the roster but types into a focused input.
    fn quit_only_applies_on_roster() {
        let mut s = state();
        assert!(wants_quit(&s, KeyCode::Char('q')));

        s.focus = Focus::NameInput;
        assert!(!wants_quit(&s, KeyCode::Char('q')));
        assert_eq!(
            decode_key(&s, KeyCode::Char('q')),
            Some(Action::InputChar('q'))
        );
    }

    #[test]
    /// With the overlay open, keys answer the overlay and nothing else.
    fn overlay_captures_keys() {
        let mut s = state();
        s.confirm_remove = Some("Ana".to_string());

        assert!(!wants_quit(&s, KeyCode::Esc));
        assert_eq!(decode_key(&s, KeyCode::Char('y')), Some(Action::ConfirmRemove));
        assert_eq!(decode_key(&s, KeyCode::Esc), Some(Action::CancelRemove));
        assert_eq!(decode_key(&s, KeyCode::Char('d')), None);
    }

    #[test]
    fn roster_keys_decode_to_navigation() {
        let s = state();
        assert_eq!(decode_key(&s, KeyCode::Down), Some(Action::CursorDown));
        assert_eq!(decode_key(&s, KeyCode::Enter), Some(Action::Submit));
        assert_eq!(decode_key(&s, KeyCode::Char('d')), Some(Action::RequestRemove));
        assert_eq!(decode_key(&s, KeyCode::Char('r')), Some(Action::Refresh));
    }
}
