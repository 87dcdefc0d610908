//! Extraction of inline template and styles blocks from a component file.
//!
//! A run is linear: read the component, extract each block that is present into
//! its sibling file, then rewrite the component. The rewrite always happens and
//! re-applies the patterns on its own, independent of what extraction found.

use log::debug;
use regex::NoExpand;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::dedent::dedent;
use crate::error::ExtractResult;
use crate::paths::{reference_path, sibling_path};
use crate::pattern::{BlockKind, ComponentPatterns};
use crate::processor::{apply, read_file, Action, FileOperation};

/// A block captured from the component source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBlock {
    pub kind: BlockKind,
    /// Byte range of the whole match, marker through closing delimiter.
    pub range: Range<usize>,
    /// Captured lines, still indented as in the source.
    pub content: String,
}

impl ExtractedBlock {
    /// Block content as written to the sibling file.
    pub fn dedented(&self) -> String {
        dedent(&self.content)
    }
}

#[derive(Debug, Clone)]
pub struct Extractor {
    patterns: ComponentPatterns,
}

impl Extractor {
    pub fn new() -> ExtractResult<Self> {
        Ok(Self {
            patterns: ComponentPatterns::new()?,
        })
    }

    /// Finds the first block of `kind` in `content`, if any.
    pub fn find_block(&self, content: &str, kind: BlockKind) -> Option<ExtractedBlock> {
        let captures = self.patterns.get(kind).captures(content)?;
        let whole = captures.get(0)?;
        let inner = captures.get(1)?;
        Some(ExtractedBlock {
            kind,
            range: whole.range(),
            content: inner.as_str().to_string(),
        })
    }

    /// Replaces every inline block in `content` with a reference to the sibling
    /// file derived from `path`.
    pub fn rewrite<P: AsRef<Path>>(&self, content: &str, path: P) -> String {
        let path = path.as_ref();
        let mut rewritten = content.to_string();
        for kind in BlockKind::ALL {
            let regex = self.patterns.get(kind);
            let count = regex.find_iter(&rewritten).count();
            if count == 0 {
                continue;
            }
            let reference = reference_path(sibling_path(path, kind.extension()));
            let line = kind.reference_line(&reference);
            debug!("Replacing {} inline {} block(s) with {}", count, kind, line);
            rewritten = regex
                .replace_all(&rewritten, NoExpand(&line))
                .into_owned();
        }
        rewritten
    }

    /// Lists the writes for the component at `path` with source `content`, in
    /// the order they must happen. The component rewrite is always last.
    pub fn plan<P: AsRef<Path>>(&self, path: P, content: &str) -> Vec<FileOperation> {
        let path = path.as_ref();
        let mut operations = Vec::with_capacity(BlockKind::ALL.len() + 1);

        for kind in BlockKind::ALL {
            match self.find_block(content, kind) {
                Some(block) => {
                    debug!(
                        "Found inline {} block at bytes {}..{}",
                        kind, block.range.start, block.range.end
                    );
                    operations.push(FileOperation {
                        action: Action::Created,
                        target: sibling_path(path, kind.extension()),
                        content: block.dedented(),
                    });
                }
                None => debug!("No inline {} block in '{}'", kind, path.display()),
            }
        }

        operations.push(FileOperation {
            action: Action::Updated,
            target: path.to_path_buf(),
            content: self.rewrite(content, path),
        });
        operations
    }
}

/// Extracts the inline template and styles of the component at `path` into
/// sibling files and rewrites the component to reference them.
///
/// # Returns
/// * `ExtractResult<Vec<PathBuf>>` - Every file written, in write order
///
/// # Errors
/// * `ExtractError::ReadError` if the component cannot be read
/// * `ExtractError::WriteError` on the first write that fails; later writes are skipped
pub fn extract_component_files<P: AsRef<Path>>(path: P) -> ExtractResult<Vec<PathBuf>> {
    let path = path.as_ref();
    let extractor = Extractor::new()?;
    let content = read_file(path)?;

    let operations = extractor.plan(path, &content);
    let mut written = Vec::with_capacity(operations.len());
    for operation in operations {
        apply(&operation)?;
        written.push(operation.target);
    }
    Ok(written)
}
