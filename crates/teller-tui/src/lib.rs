//! Full-screen TUI implementation for Teller.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{dashboard, login, notify, transfer};
pub use runtime::TuiRuntime;
use teller_core::api::ApiClient;

/// Runs the interactive banking client.
///
/// # Errors
/// Returns an error if stderr is not a terminal or terminal setup fails.
pub async fn run_interactive(base_url: String) -> Result<()> {
    // The client requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive client requires a terminal.\n\
             Use `teller balance` or `teller send` for non-interactive use."
        );
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "Teller")?;
    writeln!(err, "Service: {base_url}")?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(ApiClient::new(base_url))?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
