//! component-extract moves inline `template` and `styles` blocks out of a component
//! source file into sibling `.html` and `.scss` files, then points the component
//! at them with `templateUrl` / `styleUrls`.

/// Command-line interface module
pub mod cli;

/// Marker patterns, file extensions and fixed output strings
pub mod constants;

/// Fixed-width dedent of extracted blocks
pub mod dedent;

/// Error types and handling
pub mod error;

/// Extraction and rewrite of a single component file
pub mod extractor;

/// Logger setup
pub mod logger;

/// Sibling path derivation
pub mod paths;

/// Compiled block patterns
pub mod pattern;

/// File operations produced by the extractor and their execution
pub mod processor;
