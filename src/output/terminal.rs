//! Terminal output utilities.

use super::CmdOutput;
use colored::Colorize;

/// Render a result as plain text.
///
/// Booleans print as `true` / `false` so callers reading stdout can compare
/// case-insensitively.
pub fn render_text(output: &CmdOutput) -> String {
    match output {
        CmdOutput::UInt(n) => n.to_string(),
        CmdOutput::Bool(b) => b.to_string(),
        CmdOutput::Text(s) => s.clone(),
        CmdOutput::Summary(summary) => summary.to_string(),
    }
}

/// Format a failed command for stderr.
///
/// # Arguments
/// * `cmd` - The command line that failed
/// * `err` - The error it produced
pub fn format_error(cmd: &str, err: &dyn std::fmt::Display) -> String {
    format!("{} {}: {}", "ERROR".on_red(), cmd.on_blue(), err)
}
