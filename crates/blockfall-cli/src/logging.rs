use std::{fs::File, path::Path, sync::Arc};

use anyhow::{Context as _, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs a global `tracing` subscriber writing to `log_file`.
///
/// The terminal is owned by the UI, so there is no console logging; without
/// a file nothing is installed and events are dropped. `RUST_LOG` overrides
/// the default `info` filter.
pub(crate) fn init(log_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))?;
    Ok(())
}
