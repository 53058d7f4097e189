//! Output formatting for command results.
//!
//! This module handles rendering a [`CmdOutput`]:
//! - [`terminal`] - Plain text and coloured error lines
//! - [`json`] - JSON values via `serde_json`

mod json;
mod terminal;

use crate::config::OutputFormat;
use crate::subnet::CidrSummary;

pub use json::render_json;
pub use terminal::{format_error, render_text};

/// The single value a command produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdOutput {
    UInt(u64),
    Bool(bool),
    Text(String),
    Summary(CidrSummary),
}

/// Render a result in the configured format.
pub fn render(output: &CmdOutput, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(output),
        OutputFormat::Json => render_json(output),
    }
}
