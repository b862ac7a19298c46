//! Circdesk - Library Circulation Tracker
//!
//! Interactive in-memory circulation tracker on stdin/stdout.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use circdesk::{cli::Session, clock::SystemClock, config::AppConfig, ledger::Ledger};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing; logs go to stderr, stdout belongs to the menu
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("circdesk={}", config.logging.level).into());

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(fmt_layer).init();
    }

    tracing::info!("Starting Circdesk v{}", env!("CARGO_PKG_VERSION"));

    let mut ledger = Ledger::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), SystemClock);
    session.run(&mut ledger)?;

    Ok(())
}
