//! Masking of credentials before settings are printed or logged.

use regex::Regex;
use serde_json::Value;
use std::fmt;

/// Replacement for masked values.
pub const REDACTED: &str = "[REDACTED]";

/// Object keys whose string values are always masked.
const SECRET_KEYS: &[&str] = &["access_key_id", "secret_access_key", "password"];

/// Object keys holding `KEY=value;` connection strings.
const CONNECTION_STRING_SUFFIX: &str = "connection_string";

/// Scrubs credentials out of resolved settings.
#[derive(Clone)]
pub struct SecretRedactor {
    connection_credentials: Regex,
}

impl SecretRedactor {
    /// Redactor with the built-in patterns.
    pub fn new() -> Self {
        Self {
            // UID=...; PWD=... pairs, only at the start of an ODBC attribute
            connection_credentials: Regex::new(r"(?i)(^|;)(\s*(?:UID|PWD|PASSWORD))=([^;]*)")
                .expect("static redaction pattern is valid"),
        }
    }

    /// Mask credential pairs inside a single string.
    pub fn scrub_str(&self, value: &str) -> String {
        self.connection_credentials
            .replace_all(value, |caps: &regex::Captures| {
                if caps[3].is_empty() {
                    caps[0].to_string()
                } else {
                    format!("{}{}={REDACTED}", &caps[1], &caps[2])
                }
            })
            .into_owned()
    }

    /// Mask secrets anywhere in a serialized settings tree.
    ///
    /// Secret keys are masked whole; connection strings have their credential
    /// pairs masked. Every other string is left alone. Empty secrets stay
    /// empty so the output still shows they are unset.
    pub fn redact(&self, value: &mut Value) {
        match value {
            Value::Object(map) => {
                for (key, child) in map.iter_mut() {
                    if let Value::String(s) = child {
                        if SECRET_KEYS.contains(&key.as_str()) {
                            if !s.is_empty() {
                                *s = REDACTED.to_string();
                            }
                        } else if key.ends_with(CONNECTION_STRING_SUFFIX) {
                            *s = self.scrub_str(s);
                        }
                        continue;
                    }
                    self.redact(child);
                }
            }
            Value::Array(items) => items.iter_mut().for_each(|item| self.redact(item)),
            _ => {}
        }
    }
}

impl Default for SecretRedactor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretRedactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretRedactor").finish()
    }
}
