//! Heading-derived titles

/// Title used when a heading line has no text after its marker.
pub const UNTITLED: &str = "Untitled";

const HEADING_MARKER: &str = "# ";

/// Derive a title from the first line of `content`.
///
/// Returns `None` when the first line is not a level-one heading, in which
/// case the current title is kept. A bare marker yields [`UNTITLED`].
pub fn heading_title(content: &str) -> Option<String> {
    let first_line = content.split('\n').next().unwrap_or_default();
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);

    let rest = first_line.trim_start().strip_prefix(HEADING_MARKER)?;
    let rest = rest.trim();

    if rest.is_empty() {
        Some(UNTITLED.to_string())
    } else {
        Some(rest.to_string())
    }
}
