//! Balance command handler.

use anyhow::Result;
use teller_core::api::ApiClient;
use teller_core::format;

use super::surface;

pub async fn run(base_url: &str, name: &str, pin: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() || pin.is_empty() {
        anyhow::bail!("Name and PIN are required.");
    }

    let client = ApiClient::new(base_url);
    let account = client.authenticate(name, pin).await.map_err(surface)?;

    println!("Account:      {}", account.name);
    println!("Balance:      {}", format::usd(account.balance));
    println!("Last updated: {}", format::last_updated(account.last_updated));
    Ok(())
}
