//! File logging. The terminal UI owns stdout, so trace output goes to
//! `<data_dir>/qsearch/qsearch.log`. Filter with `RUST_LOG`, default `qsearch=info`.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn log_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|p| p.join("qsearch").join("qsearch.log"))
        .context("Could not determine data directory")
}

pub fn init() -> Result<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {dir:?}"))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {path:?}"))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("qsearch=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    Ok(path)
}
