//! Streaming console formatter
//!
//! This module provides `StreamFormatter` which writes tree lines directly
//! to stdout as the walker produces them, without buffering the tree.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeSink;

use super::format::line_prefix;

/// Formatter that streams entry lines to stdout.
/// Implements the TreeSink trait for use with TreeWalker.
pub struct StreamFormatter {
    stdout: StandardStream,
}

impl StreamFormatter {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    fn write_name(&mut self, name: &str, is_dir: bool) -> io::Result<()> {
        if is_dir {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(self.stdout, "{}", name)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}

impl TreeSink for StreamFormatter {
    fn root(&mut self, path: &Path, is_dir: bool) -> io::Result<()> {
        // Root is printed as given, with no indentation or connector.
        self.write_name(&path.display().to_string(), is_dir)
    }

    fn entry(&mut self, name: &str, depth: usize, is_dir: bool) -> io::Result<()> {
        write!(self.stdout, "{}", line_prefix(depth))?;
        self.write_name(name, is_dir)
    }
}
