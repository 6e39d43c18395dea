//! Login feature reducer.
//!
//! Key handling for the login view and processing of authenticate results.

use crossterm::event::{KeyCode, KeyEvent};
use teller_core::api::Account;

use crate::effects::UiEffect;
use crate::state::{AppState, RequestKind, RequestState, View};

pub const MISSING_CREDENTIALS: &str = "Name and PIN are required.";

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.focus_next();
            vec![]
        }
        KeyCode::Enter => submit(app),
        _ => {
            app.login.focused_mut().input(key);
            vec![]
        }
    }
}

/// Validates the form and spawns the authenticate request.
///
/// The name is trimmed; the PIN is an opaque string and taken as-is.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    if app.request.is_in_flight() {
        return vec![];
    }

    let name = app.login.name.value().trim().to_string();
    let pin = app.login.pin.value();
    if name.is_empty() || pin.is_empty() {
        app.notice.error(MISSING_CREDENTIALS);
        return vec![];
    }

    let id = app.request_seq.next_id();
    app.request = RequestState::InFlight {
        id,
        kind: RequestKind::Authenticate,
    };
    vec![UiEffect::Authenticate { id, name, pin }]
}

/// Applies the outcome of an authenticate request.
///
/// Success installs the session and moves to the dashboard; failure leaves
/// view and session untouched and surfaces the message.
pub fn handle_result(app: &mut AppState, result: Result<Account, String>) {
    match result {
        Ok(account) => {
            app.session = Some(account);
            app.view = View::Dashboard;
            app.login.clear();
        }
        Err(message) => app.notice.error(message),
    }
}
