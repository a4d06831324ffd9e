use anyhow::{Context, Result};
use std::path::PathBuf;

/// Per-user settings directory (`~/.kaspi`)
pub fn kaspi_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".kaspi"))
}
