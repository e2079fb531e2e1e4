//! `checkline demo` - show tag colors and layout.

use anyhow::Result;

use checkline::{terminal, Color, Config, StatusLine};

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config) -> Result<()> {
    let mut status = StatusLine::stdout(terminal::probe(config)).with_indent(config.indent);

    for color in Color::ALL {
        status.checking(&format!("tag color {}", color.name().to_lowercase()))?;
        status.result_colored(color.name(), Some(color))?;
    }

    status.checking("uncolored tag")?;
    status.result_colored("plain", None)?;

    // Too long to share a line with its tag
    let long = format!(
        "a message too long for its tag {}",
        ".".repeat(status.columns().saturating_sub(36))
    );
    status.checking(&long)?;
    status.result(&config.ok_label)?;

    status.checking("a line nobody closed")?;
    status.checking("the next check")?;
    status.error(&config.fail_label)?;

    status.checking("a check with details")?;
    status.error_new_line("details go on their own line")?;

    Ok(())
}
