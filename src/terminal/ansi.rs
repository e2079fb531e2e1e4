//! ANSI-capable terminal.

use crate::color::Color;
use crate::terminal::info::{TerminalInfo, TerminalKind};

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Terminal that understands SGR foreground color sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiTerminal {
    columns: usize,
}

impl AnsiTerminal {
    /// Create with a fixed width.
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }
}

impl TerminalInfo for AnsiTerminal {
    fn kind(&self) -> TerminalKind {
        TerminalKind::Ansi
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn set_foreground(&self, color: Color) -> Option<String> {
        Some(format!("\x1b[3{}m", color.ansi_index()))
    }

    fn reset(&self) -> Option<&str> {
        Some(ANSI_RESET)
    }
}
