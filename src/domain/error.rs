//! Domain errors raised while resolving deployment settings.

use thiserror::Error;

/// Errors that abort settings resolution.
///
/// A missing variable is never an error; every key has a fallback. Only
/// values that are present but cannot be interpreted for their typed field
/// end up here, and any of them makes the whole settings object unusable.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A JSON-valued setting does not parse into its expected shape
    #[error("Malformed JSON in {key}: {source}")]
    MalformedJson {
        /// Variable name
        key: String,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// An integer setting holds something other than a number in range
    #[error("Invalid integer for {key}: {value:?}")]
    InvalidInteger {
        /// Variable name
        key: String,
        /// Raw value
        value: String,
    },

    /// A boolean setting holds an unrecognized word
    #[error(
        "Invalid boolean for {key}: {value:?}. Expected one of: true, false, 1, 0, yes, no, on, off"
    )]
    InvalidBoolean {
        /// Variable name
        key: String,
        /// Raw value
        value: String,
    },
}

impl SettingsError {
    /// Name of the environment variable that failed to resolve.
    pub fn key(&self) -> &str {
        match self {
            Self::MalformedJson { key, .. }
            | Self::InvalidInteger { key, .. }
            | Self::InvalidBoolean { key, .. } => key,
        }
    }
}

/// Result alias for settings resolution.
pub type SettingsResult<T> = Result<T, SettingsError>;
