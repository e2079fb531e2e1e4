//! Aligned "checking ... [ OK ]" status lines.
//!
//! A [`StatusLine`] tracks how many columns the open checking message
//! occupies, so the result tag can be right-aligned on the same line:
//!
//! ```text
//!   checking for cc                                               [ ok ]
//! ```
//!
//! Only one line is ever open. Opening a new one while the previous line
//! has no result closes it with a red `[ ! ]` first.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::color::Color;
use crate::terminal::TerminalInfo;

/// Spaces written before a checking message by default.
pub const DEFAULT_INDENT: usize = 2;

/// Columns always reserved for the result tag.
const MIN_TAG_SPACE: usize = 15;

/// Room taken by the brackets and padding around a tag message.
const TAG_DECORATION: usize = 5;

/// Column at which the result tag (its leading space) starts.
///
/// Saturates at 0 on terminals too narrow for the tag.
pub fn result_column(columns: usize, message_width: usize) -> usize {
    columns.saturating_sub(MIN_TAG_SPACE.max(message_width + TAG_DECORATION))
}

/// Writer for status lines.
///
/// Holds the only cursor-column state, so there must be a single
/// `StatusLine` per output stream.
pub struct StatusLine<W: Write = io::Stdout> {
    out: W,
    terminal: Box<dyn TerminalInfo>,
    cursor_pos: usize,
    indent: usize,
}

impl StatusLine<io::Stdout> {
    /// Status lines on standard output.
    pub fn stdout(terminal: Box<dyn TerminalInfo>) -> Self {
        Self::new(io::stdout(), terminal)
    }
}

impl<W: Write> StatusLine<W> {
    /// Create a status line writer over `out`.
    pub fn new(out: W, terminal: Box<dyn TerminalInfo>) -> Self {
        Self {
            out,
            terminal,
            cursor_pos: 0,
            indent: DEFAULT_INDENT,
        }
    }

    /// Use `indent` for [`checking`](Self::checking).
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Characters written on the current line.
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Whether a checking line is waiting for its result.
    pub fn is_open(&self) -> bool {
        self.cursor_pos != 0
    }

    /// Terminal width used for alignment.
    pub fn columns(&self) -> usize {
        self.terminal.columns()
    }

    /// Consume the status line and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Start a checking line with the default indent.
    pub fn checking(&mut self, message: &str) -> io::Result<()> {
        self.checking_indented(message, self.indent)
    }

    /// Start a checking line indented by `indent` spaces.
    ///
    /// The line is flushed without a newline so it stays visible while
    /// the check runs.
    pub fn checking_indented(&mut self, message: &str, indent: usize) -> io::Result<()> {
        if self.is_open() {
            tracing::debug!(cursor_pos = self.cursor_pos, "closing unfinished line");
            self.result_colored("!", Some(Color::Red))?;
        }

        write!(self.out, "{:indent$}{}", "", message, indent = indent)?;
        self.out.flush()?;
        self.cursor_pos = indent + message.width();
        Ok(())
    }

    /// Close the line with a green `[ message ]` tag.
    pub fn result(&mut self, message: &str) -> io::Result<()> {
        self.result_colored(message, Some(Color::Green))
    }

    /// Close the line with a `[ message ]` tag, colored unless `color` is `None`.
    ///
    /// When the checking message reaches past the tag column, the tag goes
    /// on its own line.
    pub fn result_colored(&mut self, message: &str, color: Option<Color>) -> io::Result<()> {
        let column = result_column(self.terminal.columns(), message.width());
        let wrap = self.cursor_pos > column;
        let pad = if wrap { column } else { column - self.cursor_pos };
        self.cursor_pos = 0;

        if wrap {
            writeln!(self.out)?;
        }

        let tag = self.paint(message, color);
        writeln!(self.out, "{:pad$} [ {} ]", "", tag, pad = pad)?;
        self.out.flush()
    }

    /// Close the line with a red tag.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.result_colored(message, Some(Color::Red))
    }

    /// Report a failure on its own line, in red.
    pub fn error_new_line(&mut self, message: &str) -> io::Result<()> {
        self.error_new_line_colored(message, Some(Color::Red))
    }

    /// Report a failure on its own line.
    ///
    /// An open checking line is closed with `[ ERROR ]` first.
    pub fn error_new_line_colored(&mut self, message: &str, color: Option<Color>) -> io::Result<()> {
        if self.is_open() {
            self.error("ERROR")?;
        }

        let text = self.paint(message, color);
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Wrap `message` in the terminal's sequences for `color`.
    pub fn highlight(&self, message: &str, color: Color) -> String {
        self.terminal.highlight(message, color)
    }

    fn paint(&self, message: &str, color: Option<Color>) -> String {
        match color {
            Some(color) => self.highlight(message, color),
            None => message.to_string(),
        }
    }
}
