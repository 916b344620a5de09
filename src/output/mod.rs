//! Tree output formatting
//!
//! # Module Structure
//!
//! - `format` - Pure line rendering (indent markers, connector)
//! - `stream` - Streaming console formatter with colors

mod format;
mod stream;

pub use format::{CONNECTOR, INDENT_UNIT, line_prefix, render_line};
pub use stream::StreamFormatter;
