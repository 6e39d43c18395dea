//! HTTP client for the banking service.
//!
//! Two operations: `POST /authenticate` and `POST /transfer`. Both take and
//! return JSON; non-2xx responses carry a `{detail}` body with a
//! human-readable message.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default service endpoint when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Errors from talking to the banking service.
///
/// `Status` keeps the server's own message; the other variants have no
/// message worth showing and map to [`ApiError::GENERIC_MESSAGE`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `detail` is the server-supplied message.
    #[error("{detail}")]
    Status { status: StatusCode, detail: String },

    /// The request never produced a response.
    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Fallback shown when the server gave us nothing usable.
    pub const GENERIC_MESSAGE: &'static str = "An unknown error occurred.";

    /// The message to surface to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { detail, .. } => detail.clone(),
            ApiError::Transport(_) | ApiError::Decode(_) => Self::GENERIC_MESSAGE.to_string(),
        }
    }
}

/// The authenticated account record, as returned by `/authenticate`.
///
/// Doubles as the client's session state: `balance` and `last_updated` are
/// overwritten from each successful transfer response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub name: String,
    pub balance: f64,
    /// Unix timestamp (seconds) of the last balance change.
    pub last_updated: f64,
}

/// Successful `/transfer` response. The service also reports the recipient's
/// side; the client only consumes the sender's new balance.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferReceipt {
    pub message: String,
    pub sender: TransferParty,
    /// Unix timestamp (seconds) of the transfer.
    pub timestamp: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferParty {
    pub new_balance: f64,
}

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    name: &'a str,
    pin: &'a str,
}

#[derive(Debug, Serialize)]
struct TransferRequest<'a> {
    sender: &'a str,
    recipient: &'a str,
    amount: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for the banking service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticates `name`/`pin` and returns the account record.
    ///
    /// # Errors
    /// Returns an error on a non-2xx response or transport failure.
    pub async fn authenticate(&self, name: &str, pin: &str) -> Result<Account, ApiError> {
        self.post("/authenticate", &AuthRequest { name, pin }).await
    }

    /// Transfers `amount` from `sender` to `recipient`.
    ///
    /// # Errors
    /// Returns an error on a non-2xx response or transport failure.
    pub async fn transfer(
        &self,
        sender: &str,
        recipient: &str,
        amount: f64,
    ) -> Result<TransferReceipt, ApiError> {
        self.post(
            "/transfer",
            &TransferRequest {
                sender,
                recipient,
                amount,
            },
        )
        .await
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.json::<ErrorBody>().await {
                Ok(body) => body.detail,
                Err(_) => ApiError::GENERIC_MESSAGE.to_string(),
            };
            return Err(ApiError::Status { status, detail });
        }

        response.json().await.map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_decodes_service_field_names() {
        let account: Account = serde_json::from_str(
            r#"{"name": "Alice", "balance": 100.0, "lastUpdated": 1700000000.0}"#,
        )
        .unwrap();

        assert_eq!(account.name, "Alice");
        assert!((account.balance - 100.0).abs() < f64::EPSILON);
        assert!((account.last_updated - 1_700_000_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn receipt_ignores_recipient_side() {
        let receipt: TransferReceipt = serde_json::from_str(
            r#"{
                "message": "Transfer successful!",
                "sender": {"name": "Alice", "newBalance": 75.0},
                "recipient": {"name": "Bob", "newBalance": 125.0},
                "timestamp": 1700000100.5
            }"#,
        )
        .unwrap();

        assert_eq!(receipt.message, "Transfer successful!");
        assert!((receipt.sender.new_balance - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn status_errors_surface_server_detail() {
        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            detail: "Invalid username or PIN".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid username or PIN");
    }
}
