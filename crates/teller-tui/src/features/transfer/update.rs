//! Transfer feature reducer.
//!
//! Key handling for the transfer view, the local pre-checks, and
//! processing of transfer results.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use teller_core::api::TransferReceipt;

use crate::effects::UiEffect;
use crate::state::{AppState, RequestKind, RequestState, View};

pub const MISSING_FIELDS: &str = "Recipient and amount are required.";
pub const NOT_POSITIVE: &str = "Transfer amount must be positive.";
pub const INSUFFICIENT_FUNDS: &str = "Insufficient funds.";

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('l') {
        app.log_out();
        return vec![];
    }

    match key.code {
        KeyCode::Esc => {
            app.view = View::Dashboard;
            vec![]
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.transfer.focus_next();
            vec![]
        }
        KeyCode::Enter => submit(app),
        _ => {
            app.transfer.focused_mut().input(key);
            vec![]
        }
    }
}

/// Runs the pre-checks in order, short-circuiting on the first failure,
/// and spawns the transfer request if they all pass.
///
/// The balance check is optimistic: the service re-validates and is
/// authoritative.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    if app.request.is_in_flight() {
        return vec![];
    }

    let (sender, balance) = match &app.session {
        Some(session) => (session.name.clone(), session.balance),
        None => {
            app.log_out();
            return vec![];
        }
    };

    let recipient = app.transfer.recipient.value().trim().to_string();
    let amount = parse_amount(&app.transfer.amount.value());

    let Some(amount) = amount else {
        app.notice.error(MISSING_FIELDS);
        return vec![];
    };
    if recipient.is_empty() {
        app.notice.error(MISSING_FIELDS);
        return vec![];
    }
    if amount <= 0.0 {
        app.notice.error(NOT_POSITIVE);
        return vec![];
    }
    if amount > balance {
        app.notice.error(INSUFFICIENT_FUNDS);
        return vec![];
    }

    let id = app.request_seq.next_id();
    app.request = RequestState::InFlight {
        id,
        kind: RequestKind::Transfer,
    };
    vec![UiEffect::Transfer {
        id,
        sender,
        recipient,
        amount,
    }]
}

/// Parses the amount field. Empty, unparseable, and non-finite input all
/// read as "not provided".
fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|a| a.is_finite())
}

/// Applies the outcome of a transfer request.
///
/// Success folds the new balance and timestamp into the session, shows the
/// server's message, and returns to the dashboard; failure leaves session
/// and view untouched.
pub fn handle_result(app: &mut AppState, result: Result<TransferReceipt, String>) {
    match result {
        Ok(receipt) => {
            if let Some(session) = &mut app.session {
                session.balance = receipt.sender.new_balance;
                session.last_updated = receipt.timestamp;
            }
            app.notice.success(receipt.message);
            app.view = View::Dashboard;
            app.transfer.clear();
        }
        Err(message) => app.notice.error(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_parsing_rejects_junk() {
        assert_eq!(parse_amount("25"), Some(25.0));
        assert_eq!(parse_amount("  12.50 "), Some(12.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }
}
