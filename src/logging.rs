//! Tracing setup.
//!
//! The terminal belongs to the UI, so log lines go to a file.

use crate::Settings;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a file-backed subscriber.
///
/// `RUST_LOG` wins over the configured filter. Calling this twice is not an
/// error; the first subscriber stays in place.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.log_file().display()
        )
    })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init();

    tracing::info!(log_file = %settings.log_file().display(), "Tracing initialized");
    Ok(())
}
