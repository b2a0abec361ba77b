//! Implementation of the `superdesk-settings get` command.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::SettingValue;
use crate::domain::ports::ProcessEnvironment;
use crate::infrastructure::config::{resolve, value_source, ValueSource};

/// Arguments for `get`.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Environment variable to resolve
    pub key: String,

    /// Value used when the variable is unset or empty
    #[arg(short, long)]
    pub fallback: Option<String>,

    /// Type the fallback is declared with
    #[arg(long = "as", value_enum, default_value_t = FallbackKind::String)]
    pub kind: FallbackKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
/// Type of the `--fallback` value.
pub enum FallbackKind {
    /// Text
    String,
    /// Integer
    Int,
    /// `true` or `false`
    Bool,
}

impl FallbackKind {
    fn parse(self, raw: Option<&str>) -> Result<SettingValue> {
        let Some(raw) = raw else {
            return Ok(SettingValue::Null);
        };
        Ok(match self {
            Self::String => SettingValue::from(raw),
            Self::Int => SettingValue::Int(
                raw.parse()
                    .with_context(|| format!("Fallback {raw:?} is not an integer"))?,
            ),
            Self::Bool => SettingValue::Bool(
                raw.parse()
                    .with_context(|| format!("Fallback {raw:?} is not true or false"))?,
            ),
        })
    }
}

#[derive(Debug, Serialize)]
/// One resolved variable.
pub struct GetOutput {
    /// Variable name
    pub key: String,
    /// Resolved value
    pub value: SettingValue,
    /// Kind of the resolved value
    pub kind: &'static str,
    /// Where the value came from
    pub source: ValueSource,
}

impl CommandOutput for GetOutput {
    fn to_human(&self) -> String {
        let source = match self.source {
            ValueSource::Fallback => "fallback",
            ValueSource::ForcedEmpty => "forced empty",
            ValueSource::Environment => "environment",
        };
        let value = match &self.value {
            SettingValue::Str(s) if s.is_empty() => "\"\"".to_string(),
            other => other.to_string(),
        };
        format!("{} = {} ({}, from {})", self.key, value, self.kind, source)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run `get`.
pub fn execute(args: &GetArgs, json_mode: bool) -> Result<()> {
    let fallback = args.kind.parse(args.fallback.as_deref())?;
    let env = ProcessEnvironment;
    let value = resolve(&env, &args.key, fallback);

    output(
        &GetOutput {
            key: args.key.clone(),
            kind: value.kind(),
            value,
            source: value_source(&env, &args.key),
        },
        json_mode,
    );
    Ok(())
}
