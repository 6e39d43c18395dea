//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use crate::state::RequestId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn a `/authenticate` request.
    Authenticate {
        id: RequestId,
        name: String,
        pin: String,
    },

    /// Spawn a `/transfer` request.
    Transfer {
        id: RequestId,
        sender: String,
        recipient: String,
        amount: f64,
    },
}
