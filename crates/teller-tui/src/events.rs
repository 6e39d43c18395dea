//! UI event types.
//!
//! All external inputs (terminal, async API results) are converted to
//! `UiEvent` before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Spawned API requests send their completion events directly to the
//! runtime's event inbox; the runtime drains the inbox each loop iteration.

use crossterm::event::Event as CrosstermEvent;
use teller_core::api::{Account, TransferReceipt};

use crate::state::RequestId;

/// Unified event enum for the TUI.
///
/// The reducer (`update`) pattern-matches on these events to update state.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (spinner animation, notification expiry).
    Tick,

    /// Terminal input event (key, resize).
    Terminal(CrosstermEvent),

    /// Async API request completed.
    Api(ApiUiEvent),
}

/// Completion events for API requests.
///
/// `id` is the request id the effect was spawned with; the reducer drops
/// completions whose id is no longer current. `Err` carries the message to
/// show the user (server detail or the generic fallback).
#[derive(Debug)]
pub enum ApiUiEvent {
    /// `/authenticate` finished.
    AuthenticateDone {
        id: RequestId,
        result: Result<Account, String>,
    },

    /// `/transfer` finished.
    TransferDone {
        id: RequestId,
        result: Result<TransferReceipt, String>,
    },
}
