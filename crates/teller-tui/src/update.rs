//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::{ApiUiEvent, UiEvent};
use crate::state::{AppState, View};
use crate::{dashboard, login, transfer};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Advance spinner animation
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            // Auto-dismiss the notification once its timer runs out
            app.notice.check_timeout();
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Api(api_event) => handle_api_event(app, api_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from any view
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    match app.view {
        View::Login => login::handle_key(app, key),
        View::Dashboard => dashboard::handle_key(app, key),
        View::Transfer => transfer::handle_key(app, key),
    }
}

/// Routes API completions to the owning feature.
///
/// A completion whose id is not the in-flight request is stale (the user
/// already moved on) and is dropped without touching any state.
fn handle_api_event(app: &mut AppState, event: ApiUiEvent) -> Vec<UiEffect> {
    match event {
        ApiUiEvent::AuthenticateDone { id, result } => {
            if app.request.finish_if_current(id) {
                login::handle_result(app, result);
            }
            vec![]
        }
        ApiUiEvent::TransferDone { id, result } => {
            if app.request.finish_if_current(id) {
                transfer::handle_result(app, result);
            }
            vec![]
        }
    }
}
