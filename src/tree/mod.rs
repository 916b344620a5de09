//! Directory tree walking logic
//!
//! `TreeWalker` performs a single-threaded depth-first pre-order walk,
//! reading each directory's children in sorted order via `read_dir_names`
//! and emitting one callback per entry into a `TreeSink`.

mod reader;
mod walker;

pub use reader::read_dir_names;
pub use walker::{TreeSink, TreeWalker};
