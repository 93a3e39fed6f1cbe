//! employee-record: demo of the Employee record
//!
//! Reads one employee from the configured text source, builds another from
//! configured values, and prints both.

use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use employee_record::{App, AppConfig};

/// Initialize logging with RUST_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config = AppConfig::load(Some(&project_root)).unwrap_or_else(|e| {
        tracing::warn!("Using default configuration: {}", e);
        AppConfig::default()
    });

    tracing::info!("Reading employee source {:?}", config.source.path);

    let app = App::new(config);
    let stdout = io::stdout();
    app.run(&mut stdout.lock())
        .with_context(|| format!("demo failed for source {:?}", app.config().source.path))?;

    Ok(())
}
