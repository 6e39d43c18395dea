//! Command handlers.

pub mod balance;
pub mod config;
pub mod send;

use teller_core::api::ApiError;

/// Logs a failed service request and converts it to the user-facing message.
pub(crate) fn surface(err: ApiError) -> anyhow::Error {
    tracing::error!(error = %err, "banking service request failed");
    anyhow::anyhow!(err.user_message())
}
