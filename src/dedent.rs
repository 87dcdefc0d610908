use crate::constants::INDENT_WIDTH;

/// Strips exactly [`INDENT_WIDTH`] leading spaces from every line that has them.
///
/// Lines with a shorter indent, or indented with anything other than spaces, are
/// kept as they are. This is not a common-prefix dedent: deeper lines keep
/// everything past the first four spaces.
pub fn dedent(block: &str) -> String {
    let indent = " ".repeat(INDENT_WIDTH);
    block
        .split('\n')
        .map(|line| line.strip_prefix(indent.as_str()).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}
