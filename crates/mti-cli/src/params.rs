/*
[INPUT]:  Inline JSON or a YAML/JSON params file from the command line
[OUTPUT]: Value tree passed as <params>
[POS]:    Input layer - command params
[UPDATE]: When adding params sources
*/

use std::path::Path;

use anyhow::{Context, Result, bail};
use mti_adapter::Value;

/// Resolve command params; no source means an empty mapping.
pub fn load_params(inline: Option<&str>, file: Option<&Path>) -> Result<Value> {
    let raw: serde_json::Value = match (inline, file) {
        (Some(_), Some(_)) => bail!("--params and --params-file are mutually exclusive"),
        (Some(json), None) => serde_json::from_str(json).context("parse --params as JSON")?,
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("read params file {}", path.display()))?;
            // YAML is a superset of JSON, so one parser covers both
            serde_yaml::from_str(&content).context("parse params file")?
        }
        (None, None) => return Ok(Value::empty_map()),
    };
    Ok(Value::from(raw))
}
