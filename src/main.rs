//! Purse - render balances as placeholder text.

use anyhow::{bail, Context, Result};
use clap::Parser;
use purse::config::{EngineConfig, TomlConfig};
use purse::placeholder::EconomyPlaceholder;
use purse::source::{Ledger, DEFAULT_FRACTIONAL_DIGITS};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Player the command-line balance is recorded for.
const CONSOLE_PLAYER: &str = "console";

#[derive(Parser, Debug)]
#[command(name = "purse")]
#[command(about = "Render a balance the way balance placeholders do", long_about = None)]
struct Args {
    /// Balance to render
    #[arg(allow_negative_numbers = true)]
    balance: f64,

    /// Request tokens, e.g. balance_formatted or balance_3dp
    #[arg(required = true)]
    tokens: Vec<String>,

    /// TOML file with a [formatting] section
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fractional digits reported by the economy
    #[arg(long, default_value_t = DEFAULT_FRACTIONAL_DIGITS, allow_negative_numbers = true)]
    fraction_digits: i32,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args)?;
    tracing::info!("Starting Purse");

    let mut ledger = Ledger::new().with_fractional_digits(args.fraction_digits);
    ledger.deposit(CONSOLE_PLAYER, args.balance);

    let handler = match &args.config {
        Some(path) => TomlConfig::load(path)
            .and_then(|config| EconomyPlaceholder::from_config(&config, ledger))
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => EconomyPlaceholder::new(EngineConfig::default(), ledger),
    };

    for token in &args.tokens {
        match handler.on_request(Some(CONSOLE_PLAYER), token) {
            Some(text) => println!("{}", text),
            None => bail!("Unrecognized request: {}", token),
        }
    }

    tracing::info!("Purse exited");
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    // Set up logging to a file if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
