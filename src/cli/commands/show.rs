//! Implementation of the `superdesk-settings show` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::cli::output::{output, table, truncate, CommandOutput};
use crate::infrastructure::logging::SecretRedactor;

/// Arguments for `show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print credentials instead of masking them
    #[arg(long)]
    pub reveal: bool,

    /// Print YAML instead of a table (ignored with --json)
    #[arg(long)]
    pub yaml: bool,
}

/// Serialized settings tree.
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    #[serde(skip)]
    yaml: bool,
    settings: Value,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        if self.yaml {
            return serde_yaml::to_string(&self.settings).unwrap_or_default();
        }

        let mut rows = Vec::new();
        flatten("", &self.settings, &mut rows);
        table(
            &["Setting", "Value"],
            rows.into_iter().map(|(key, value)| vec![key, truncate(&value, 80)]),
        )
    }

    fn to_json(&self) -> Value {
        self.settings.clone()
    }
}

/// Run `show`.
pub fn execute(args: &ShowArgs, base_dir: Option<&Path>, json_mode: bool) -> Result<()> {
    let settings = super::load_from_process(base_dir)?;
    let mut value = serde_json::to_value(&settings).context("Failed to serialize settings")?;

    if !args.reveal {
        SecretRedactor::new().redact(&mut value);
    }

    output(
        &ShowOutput {
            yaml: args.yaml,
            settings: value,
        },
        json_mode,
    );
    Ok(())
}

/// Dotted-path rows for every scalar leaf. Arrays of scalars are joined.
fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, rows);
            }
        }
        Value::Array(items) if items.iter().all(|v| !v.is_object() && !v.is_array()) => {
            let joined = items.iter().map(scalar).collect::<Vec<_>>().join(", ");
            rows.push((prefix.to_string(), joined));
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten(&format!("{prefix}[{i}]"), child, rows);
            }
        }
        other => rows.push((prefix.to_string(), scalar(other))),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "(unset)".to_string(),
        Value::String(s) if s.is_empty() => "\"\"".to_string(),
        Value::String(s) => s.replace('\n', "\\n"),
        other => other.to_string(),
    }
}
