//! checkline - aligned, colored status lines for setup scripts.
//!
//! ```no_run
//! use checkline::{terminal, Config, StatusLine};
//!
//! let config = Config::default();
//! let mut status = StatusLine::stdout(terminal::probe(&config));
//! status.checking("for a C compiler")?;
//! status.result("cc")?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod logging;
pub mod status;
pub mod terminal;

pub use color::{Color, ParseColorError};
pub use config::{ColorChoice, Config, ConfigError};
pub use status::StatusLine;
pub use terminal::{TerminalInfo, TerminalKind};

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", ",
    env!("CHECKLINE_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CHECKLINE_BUILD_DATE"),
    ")"
);
