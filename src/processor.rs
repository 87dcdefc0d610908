use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CREATED_ACTION, UPDATED_ACTION};
use crate::error::{ExtractError, ExtractResult};

/// What a write does to its target, as reported on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A sibling file was created (or truncated) from an extracted block
    Created,
    /// The component file was rewritten
    Updated,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Created => write!(f, "{}", CREATED_ACTION),
            Action::Updated => write!(f, "{}", UPDATED_ACTION),
        }
    }
}

/// A single pending write produced by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOperation {
    pub action: Action,
    pub target: PathBuf,
    pub content: String,
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Reads a component with its line endings normalized, so the block patterns
/// match CRLF sources and the rewrite is written back with `\n` endings.
pub fn read_file(path: &Path) -> ExtractResult<String> {
    debug!("Reading '{}'.", path.display());
    let content = fs::read_to_string(path).map_err(|source| ExtractError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_newlines(&content))
}

pub fn write_file(path: &Path, content: &str) -> ExtractResult<()> {
    debug!("Writing {} bytes to '{}'.", content.len(), path.display());
    fs::write(path, content).map_err(|source| ExtractError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}

/// Performs the write and prints its confirmation line.
pub fn apply(operation: &FileOperation) -> ExtractResult<()> {
    write_file(&operation.target, &operation.content)?;
    println!("{} {}", operation.action, operation.target.display());
    Ok(())
}
