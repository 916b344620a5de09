//! TreeWalker - recursive depth-first pre-order traversal

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use super::reader::read_dir_names;

/// Callback for tree output - receives one call per visited entry.
pub trait TreeSink {
    /// Called once with the root path before traversal begins.
    fn root(&mut self, path: &Path, is_dir: bool) -> io::Result<()>;

    /// Called for every entry below the root, in visit order.
    fn entry(&mut self, name: &str, depth: usize, is_dir: bool) -> io::Result<()>;
}

/// Depth-first pre-order walker over a directory tree.
///
/// Siblings are visited in byte-wise sorted name order, each directory
/// before any of its descendants. Only link-level metadata is inspected,
/// so a symlink is a leaf even when it points at a directory.
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    /// Walk the tree rooted at `root`, emitting entries into `sink`.
    ///
    /// The first failure to stat an entry or list a directory aborts the
    /// whole walk; lines emitted before the failure are not retracted.
    pub fn walk<S: TreeSink>(&self, root: &Path, sink: &mut S) -> io::Result<()> {
        let meta = fs::symlink_metadata(root)?;
        sink.root(root, meta.is_dir())?;
        self.visit(root, &meta, 0, sink)
    }

    fn visit<S: TreeSink>(
        &self,
        path: &Path,
        meta: &Metadata,
        depth: usize,
        sink: &mut S,
    ) -> io::Result<()> {
        if !meta.is_dir() {
            return Ok(());
        }
        for name in read_dir_names(path)? {
            let child = path.join(&name);
            let child_meta = fs::symlink_metadata(&child)?;
            sink.entry(&name.to_string_lossy(), depth, child_meta.is_dir())?;
            if let Err(err) = self.visit(&child, &child_meta, depth + 1, sink) {
                // A failed directory visit aborts the walk; a failed leaf
                // visit never does.
                if child_meta.is_dir() {
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}
