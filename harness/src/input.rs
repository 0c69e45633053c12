use anyhow::{Context, Result};
use log::info;
use std::fs::read_to_string;
use std::path::Path;

/// Reads a puzzle input verbatim. Trailing newlines are kept.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let input = read_to_string(path)
        .context(format!("Failed to read puzzle input {}", path.display()))?;
    info!("Loaded {} bytes of input from {}", input.len(), path.display());
    Ok(input)
}
