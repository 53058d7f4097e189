//! JSON output.

use super::CmdOutput;
use serde_json::{json, Value};

fn to_value(output: &CmdOutput) -> Value {
    match output {
        CmdOutput::UInt(n) => json!(n),
        CmdOutput::Bool(b) => json!(b),
        CmdOutput::Text(s) => json!(s),
        CmdOutput::Summary(summary) => {
            serde_json::to_value(summary).unwrap_or_else(|e| json!({ "error": e.to_string() }))
        }
    }
}

/// Render a result as a single line of JSON.
pub fn render_json(output: &CmdOutput) -> String {
    to_value(output).to_string()
}
