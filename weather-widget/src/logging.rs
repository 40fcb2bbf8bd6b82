//! Tracing setup
//!
//! stdout belongs to the terminal UI, so log lines go to a file or nowhere.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install a global subscriber appending to `path`.
/// Verbosity comes from `RUST_LOG`, defaulting to `info`.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
