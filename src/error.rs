//! Error handling for component-extract.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting blocks from a component file.
///
/// A missing template or styles block is not an error; the extractor just skips
/// that sibling file.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The component file could not be read
    #[error("Failed to read '{}': {source}.", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A sibling file or the rewritten component could not be written
    #[error("Failed to write '{}': {source}.", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A block pattern failed to compile
    #[error("Pattern error: {0}.")]
    PatternError(#[from] regex::Error),
}

/// Convenience type alias for Results with ExtractError as the error type.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: ExtractError) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
