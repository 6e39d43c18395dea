//! Effect handler implementations.
//!
//! Pure async functions: each performs one API request and returns the
//! `UiEvent` to deliver to the reducer. The runtime handles spawning.

use std::sync::Arc;

use teller_core::api::ApiClient;

use crate::events::{ApiUiEvent, UiEvent};
use crate::state::RequestId;

pub async fn authenticate(
    client: Arc<ApiClient>,
    id: RequestId,
    name: String,
    pin: String,
) -> UiEvent {
    let result = client.authenticate(&name, &pin).await.map_err(|err| {
        tracing::error!(error = %err, "authenticate request failed");
        err.user_message()
    });
    UiEvent::Api(ApiUiEvent::AuthenticateDone { id, result })
}

pub async fn transfer(
    client: Arc<ApiClient>,
    id: RequestId,
    sender: String,
    recipient: String,
    amount: f64,
) -> UiEvent {
    let result = client
        .transfer(&sender, &recipient, amount)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "transfer request failed");
            err.user_message()
        });
    UiEvent::Api(ApiUiEvent::TransferDone { id, result })
}
