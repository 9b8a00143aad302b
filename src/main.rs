//! Contact Book - Main entry point
//!
//! Runs the interactive assistant over stdin/stdout, loading the address
//! book at startup and saving it on exit.

use anyhow::Result;
use clap::Parser;
use contact_book::{Config, JsonFileRepository, Session};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-book")]
#[command(about = "Assistant bot for a local contact book with birthday reminders")]
struct Cli {
    /// Address book file (overrides CONTACT_BOOK_FILE)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Days ahead the `birthdays` command looks (overrides BIRTHDAY_WINDOW_DAYS)
    #[arg(short, long)]
    days: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if let Some(file) = cli.file {
        config.storage_path = file;
    }
    if let Some(days) = cli.days {
        Config::validate_window("--days", days)?;
        config.birthday_window_days = days;
    }

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {}", config.storage_path.display());

    let repository = JsonFileRepository::new(&config.storage_path);
    let mut session = match Session::start(Box::new(repository), config.birthday_window_days) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout())?;

    info!("Contact book shutdown complete");
    Ok(())
}
