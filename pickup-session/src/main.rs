//! pickup - session snapshot inspection tool
//!
//! Resolves the state file location the same way an embedding player
//! adapter would, then prints the persisted session state or resets it.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pickup_common::config::resolve_state_file;
use pickup_session::SnapshotStore;

/// Command-line arguments for pickup
#[derive(Parser, Debug)]
#[command(name = "pickup")]
#[command(about = "Inspect the persisted media player session state")]
#[command(version)]
struct Args {
    /// Path to the session state file (overrides env and config file)
    #[arg(short, long)]
    state_file: Option<String>,

    /// Delete the state file instead of printing it
    #[arg(long)]
    reset: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pickup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let path = resolve_state_file(args.state_file.as_deref())
        .context("Failed to resolve state file location")?;
    info!("State file: {}", path.display());

    if args.reset {
        match std::fs::remove_file(&path) {
            Ok(()) => println!("Removed {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                println!("Nothing to remove at {}", path.display());
            }
            Err(e) => return Err(e).context("Failed to remove state file"),
        }
        return Ok(());
    }

    let store = SnapshotStore::new(&path);
    match store.load().context("Failed to load snapshot")? {
        Some(snapshot) => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        None => {
            println!("No saved session at {}", path.display());
        }
    }

    Ok(())
}
