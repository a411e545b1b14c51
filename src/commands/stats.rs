//! Statistics command
//!
//! Summarizes the games kept in a result store.

use crate::record::{JsonStore, Statistics};
use anyhow::{Context, Result, bail};
use std::path::Path;

/// Load the store at `path` and compute its statistics
///
/// # Errors
///
/// Returns an error if the store does not exist or cannot be parsed.
pub fn load_statistics(path: &Path) -> Result<Statistics> {
    if !path.exists() {
        bail!("no result store at {}", path.display());
    }

    let store = JsonStore::open(path)
        .with_context(|| format!("failed to open result store {}", path.display()))?;
    Ok(store.statistics())
}
