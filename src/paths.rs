//! Sibling path derivation.
//! Paths are derived textually from the component's file name, the filesystem is
//! never consulted.

use std::path::{Path, PathBuf};

/// Derives the sibling of `path` carrying `extension` instead of its own.
///
/// Only the final path component changes, so `src/app.ts/foo.component.ts` becomes
/// `src/app.ts/foo.component.html`. The name is handled as an `OsStr`, so bytes that
/// are not valid UTF-8 survive into the sibling's name.
pub fn sibling_path<P: AsRef<Path>>(path: P, extension: &str) -> PathBuf {
    path.as_ref().with_extension(extension)
}

/// Relative reference to a sibling as written into the component, e.g. `./foo.component.html`.
///
/// The component text is UTF-8, so a non-UTF-8 name is rendered lossily here.
pub fn reference_path<P: AsRef<Path>>(sibling: P) -> String {
    let name = sibling
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("./{}", name)
}
