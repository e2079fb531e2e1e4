//! TerminalInfo trait.

use crate::color::Color;

/// Width used whenever the real terminal width cannot be determined.
pub const DEFAULT_COLUMNS: usize = 80;

/// Which implementation was selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKind {
    /// Terminal that understands ANSI color sequences
    Ansi,
    /// No color support (pipe, dumb terminal, NO_COLOR, unsupported platform)
    Plain,
}

impl TerminalKind {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ansi => "ansi",
            Self::Plain => "plain",
        }
    }
}

/// Capabilities of the terminal that status lines are written to.
///
/// Values are resolved once when the terminal is probed and never change
/// afterwards.
pub trait TerminalInfo: Send + Sync {
    /// The implementation identifier.
    fn kind(&self) -> TerminalKind;

    /// Terminal width in characters.
    fn columns(&self) -> usize;

    /// Sequence that switches the foreground to `color`, if supported.
    fn set_foreground(&self, color: Color) -> Option<String>;

    /// Sequence that restores default attributes, if supported.
    fn reset(&self) -> Option<&str>;

    /// Wrap `message` in the foreground and reset sequences for `color`.
    ///
    /// Returns `message` unchanged unless both sequences are available, so
    /// a half-open escape never reaches the output.
    fn highlight(&self, message: &str, color: Color) -> String {
        match (self.set_foreground(color), self.reset()) {
            (Some(start), Some(end)) => format!("{}{}{}", start, message, end),
            _ => message.to_string(),
        }
    }
}
