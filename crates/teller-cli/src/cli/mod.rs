//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use teller_core::config::{self, Config};
use teller_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "teller")]
#[command(version = "0.1.0")]
#[command(about = "Terminal client for the demo banking service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the banking service (overrides config and TELLER_API_BASE_URL)
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Authenticate and print the account summary
    Balance {
        /// Account name
        #[arg(long)]
        name: String,

        /// Account PIN
        #[arg(long)]
        pin: String,
    },

    /// Transfer money to another account
    Send {
        /// Sender account name
        #[arg(long)]
        name: String,

        /// Sender account PIN
        #[arg(long)]
        pin: String,

        /// Recipient account name
        #[arg(long, value_name = "RECIPIENT")]
        to: String,

        /// Amount to transfer
        #[arg(long)]
        amount: f64,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;
    let env_base = std::env::var(config::BASE_URL_ENV).ok();
    let base_url = config::resolve_base_url(cli.base_url.as_deref(), env_base.as_deref(), &config);

    // default to the interactive client
    let Some(command) = cli.command else {
        let _guard = logging::init_file().context("init logging")?;
        return teller_tui::run_interactive(base_url).await;
    };

    match command {
        Commands::Balance { name, pin } => {
            logging::init_stderr();
            commands::balance::run(&base_url, &name, &pin).await
        }

        Commands::Send {
            name,
            pin,
            to,
            amount,
        } => {
            logging::init_stderr();
            commands::send::run(&base_url, &name, &pin, &to, amount).await
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
