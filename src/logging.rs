//! Diagnostic logging to a file in the data directory.
//!
//! The terminal belongs to the UI while it runs, so log lines never go to
//! stdout or stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "GSEARCH_LOG";
const DEFAULT_DIRECTIVE: &str = "info";
const LOG_FILE_NAME: &str = "gsearch.log";

/// Install the global subscriber writing to `<dir>/gsearch.log`.
///
/// `level` (from the CLI) takes precedence over [`LOG_ENV`]. Returns the log
/// file path.
pub fn initialize(dir: &Path, level: Option<&str>) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = File::options()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(filter(level))
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}

fn filter(level: Option<&str>) -> EnvFilter {
	if let Some(level) = level {
		return EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
	}
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
