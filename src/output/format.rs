//! Line rendering for tree entries
//!
//! This module provides the pure formatting layer: given an entry name and
//! its nesting depth, it produces the single output line for that entry.

/// Marker prepended once per nesting level.
pub const INDENT_UNIT: &str = "|   ";

/// Connector tying an entry to its parent, followed by a space before the name.
pub const CONNECTOR: &str = "|--";

/// Build the indentation-plus-connector prefix for an entry at `depth`.
pub fn line_prefix(depth: usize) -> String {
    let mut prefix = String::with_capacity(depth * INDENT_UNIT.len() + CONNECTOR.len() + 1);
    for _ in 0..depth {
        prefix.push_str(INDENT_UNIT);
    }
    prefix.push_str(CONNECTOR);
    prefix.push(' ');
    prefix
}

/// Render a complete entry line (without trailing newline).
///
/// The root path itself is never rendered through here; it is emitted
/// verbatim with no indentation before traversal begins.
pub fn render_line(name: &str, depth: usize) -> String {
    format!("{}{}", line_prefix(depth), name)
}
