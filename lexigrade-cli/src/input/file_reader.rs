//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read every file, in order
    pub fn read_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
        paths
            .iter()
            .map(|path| Self::read_text(path.as_ref()))
            .collect()
    }
}
