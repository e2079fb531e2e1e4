//! Terminal without color support.

use crate::color::Color;
use crate::terminal::info::{TerminalInfo, TerminalKind, DEFAULT_COLUMNS};

/// Terminal with no color capabilities.
///
/// Used for pipes, dumb terminals, `NO_COLOR`, and platforms without a
/// terminal capability database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainTerminal {
    columns: usize,
}

impl PlainTerminal {
    /// Create with a fixed width.
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }
}

impl Default for PlainTerminal {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl TerminalInfo for PlainTerminal {
    fn kind(&self) -> TerminalKind {
        TerminalKind::Plain
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn set_foreground(&self, _color: Color) -> Option<String> {
        None
    }

    fn reset(&self) -> Option<&str> {
        None
    }
}
