//! Common constants used throughout component-extract.

/// Extension of the extracted template sibling.
pub const TEMPLATE_EXTENSION: &str = "html";

/// Extension of the extracted styles sibling.
pub const STYLES_EXTENSION: &str = "scss";

/// Inline template: `template:` followed by a backtick block closed by an indented "`,".
pub const TEMPLATE_PATTERN: &str = r"(?s)template:\s*`\n(.*?)\n\s+`,";

/// Inline styles: `styles: [` followed by a backtick block closed by an indented "`]".
pub const STYLES_PATTERN: &str = r"(?s)styles:\s*\[`\n(.*?)\n\s+`\]";

/// Number of leading spaces removed from each extracted line.
pub const INDENT_WIDTH: usize = 4;

pub const CREATED_ACTION: &str = "Created";
pub const UPDATED_ACTION: &str = "Updated";
