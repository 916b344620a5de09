//! Twig - a tree command that prints bare directory structure

pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use output::{StreamFormatter, render_line};
pub use tree::{TreeSink, TreeWalker, read_dir_names};
