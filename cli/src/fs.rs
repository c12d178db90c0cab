use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create the directory if it doesn't exist; error if a non-directory exists there.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            anyhow::bail!("path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path).with_context(|| format!("failed to create directory {}", path.display()))?;
    }
    Ok(())
}
