//! Send command handler.
//!
//! Runs the same pre-checks as the interactive transfer form, in the same
//! order, before anything goes over the wire: presence, positivity, then
//! the optimistic balance check against the freshly authenticated account.

use anyhow::Result;
use teller_core::api::ApiClient;
use teller_core::format;

use super::surface;

pub async fn run(base_url: &str, name: &str, pin: &str, to: &str, amount: f64) -> Result<()> {
    let name = name.trim();
    let recipient = to.trim();
    if name.is_empty() || pin.is_empty() {
        anyhow::bail!("Name and PIN are required.");
    }
    if recipient.is_empty() {
        anyhow::bail!("Recipient and amount are required.");
    }
    if !amount.is_finite() || amount <= 0.0 {
        anyhow::bail!("Transfer amount must be positive.");
    }

    let client = ApiClient::new(base_url);
    let account = client.authenticate(name, pin).await.map_err(surface)?;
    if amount > account.balance {
        anyhow::bail!("Insufficient funds.");
    }

    let receipt = client
        .transfer(&account.name, recipient, amount)
        .await
        .map_err(surface)?;

    println!("{}", receipt.message);
    println!("New balance: {}", format::usd(receipt.sender.new_balance));
    Ok(())
}
