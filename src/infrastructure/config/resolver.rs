//! Environment lookup with fallbacks.
//!
//! Every variable goes through the same rule: unset or empty falls back,
//! [`EMPTY_SENTINEL`] forces an empty string, anything else is taken as is.
//! The typed accessors layer parsing on top of that rule.

use serde::de::DeserializeOwned;
use std::str::FromStr;
use tracing::debug;

use crate::domain::models::SettingValue;
use crate::domain::ports::Environment;
use crate::domain::{SettingsError, SettingsResult};

/// Value operators set to get an explicitly empty setting instead of the default.
pub const EMPTY_SENTINEL: &str = "__EMPTY__";

/// Resolve `key` against `env`, falling back to `fallback`.
///
/// The fallback is returned untouched, so an integer default stays an
/// integer. Environment values are always strings.
pub fn resolve(env: &impl Environment, key: &str, fallback: impl Into<SettingValue>) -> SettingValue {
    match lookup(env, key) {
        Lookup::Unset => fallback.into(),
        Lookup::ForcedEmpty => SettingValue::Str(String::new()),
        Lookup::Value(value) => SettingValue::Str(value),
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueSource {
    /// Unset or empty, the fallback was used
    Fallback,
    /// Set to the forced-empty marker
    ForcedEmpty,
    /// Taken verbatim from the environment
    Environment,
}

/// Report which branch [`resolve`] takes for `key` without resolving it.
pub fn value_source(env: &impl Environment, key: &str) -> ValueSource {
    match lookup(env, key) {
        Lookup::Unset => ValueSource::Fallback,
        Lookup::ForcedEmpty => ValueSource::ForcedEmpty,
        Lookup::Value(_) => ValueSource::Environment,
    }
}

enum Lookup {
    Unset,
    ForcedEmpty,
    Value(String),
}

fn lookup(env: &impl Environment, key: &str) -> Lookup {
    match env.var(key) {
        None => Lookup::Unset,
        Some(value) if value.is_empty() => Lookup::Unset,
        Some(value) if value == EMPTY_SENTINEL => Lookup::ForcedEmpty,
        Some(value) => Lookup::Value(value),
    }
}

/// Typed accessors over an [`Environment`].
#[derive(Debug)]
pub struct Resolver<'a, E: Environment> {
    env: &'a E,
}

impl<'a, E: Environment> Resolver<'a, E> {
    /// Accessors reading from `env`.
    pub const fn new(env: &'a E) -> Self {
        Self { env }
    }

    /// Untyped resolution, see [`resolve`].
    pub fn raw(&self, key: &str, fallback: impl Into<SettingValue>) -> SettingValue {
        resolve(self.env, key, fallback)
    }

    /// String setting; forced-empty yields `""`.
    pub fn string(&self, key: &str, default: &str) -> String {
        match lookup(self.env, key) {
            Lookup::Unset => {
                debug!(key, "using default");
                default.to_string()
            }
            Lookup::ForcedEmpty => {
                debug!(key, "forced empty");
                String::new()
            }
            Lookup::Value(value) => {
                debug!(key, "from environment");
                value
            }
        }
    }

    /// String setting whose default is "unset".
    pub fn optional_string(&self, key: &str) -> Option<String> {
        match lookup(self.env, key) {
            Lookup::Unset => None,
            Lookup::ForcedEmpty => Some(String::new()),
            Lookup::Value(value) => Some(value),
        }
    }

    /// Integer setting. The forced-empty marker yields `None`, an explicitly
    /// empty value; anything present that does not parse is an error.
    pub fn integer<T: FromStr>(&self, key: &str, default: T) -> SettingsResult<Option<T>> {
        let value = match lookup(self.env, key) {
            Lookup::Unset => return Ok(Some(default)),
            Lookup::ForcedEmpty => {
                debug!(key, "forced empty");
                return Ok(None);
            }
            Lookup::Value(value) => value,
        };

        value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SettingsError::InvalidInteger {
                key: key.to_string(),
                value,
            })
    }

    /// Boolean setting. Forced-empty reads as `false`.
    pub fn boolean(&self, key: &str, default: bool) -> SettingsResult<bool> {
        match lookup(self.env, key) {
            Lookup::Unset => Ok(default),
            Lookup::ForcedEmpty => Ok(false),
            Lookup::Value(value) => {
                parse_bool(&value).ok_or_else(|| SettingsError::InvalidBoolean {
                    key: key.to_string(),
                    value,
                })
            }
        }
    }

    /// Structured setting stored as JSON text, with a JSON literal default.
    ///
    /// Parse failures are returned, never replaced by the default.
    pub fn json<T: DeserializeOwned>(&self, key: &str, default_json: &str) -> SettingsResult<T> {
        let raw = self.string(key, default_json);
        serde_json::from_str(&raw).map_err(|source| SettingsError::MalformedJson {
            key: key.to_string(),
            source,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MapEnvironment;
    use std::collections::BTreeMap;

    #[test]
    fn test_unset_returns_fallback_with_type() {
        let env = MapEnvironment::empty();
        assert_eq!(resolve(&env, "LDAP_SERVER_PORT", 389), SettingValue::Int(389));
        assert_eq!(resolve(&env, "AMAZON_S3_USE_HTTPS", false), SettingValue::Bool(false));
        assert_eq!(resolve(&env, "ODBC_PUBLISH", None::<&str>), SettingValue::Null);
        assert_eq!(resolve(&env, "APP_NAME", "Superdesk"), SettingValue::from("Superdesk"));
    }

    #[test]
    fn test_empty_value_falls_back() {
        let env = MapEnvironment::empty().with_var("LDAP_SERVER_PORT", "");
        assert_eq!(resolve(&env, "LDAP_SERVER_PORT", 389), SettingValue::Int(389));
    }

    #[test]
    fn test_sentinel_is_empty_string_for_any_fallback() {
        let env = MapEnvironment::empty().with_var("K", EMPTY_SENTINEL);
        assert_eq!(resolve(&env, "K", 389), SettingValue::Str(String::new()));
        assert_eq!(resolve(&env, "K", true), SettingValue::Str(String::new()));
        assert_eq!(resolve(&env, "K", None::<&str>), SettingValue::Str(String::new()));
        assert_eq!(resolve(&env, "K", "x"), SettingValue::Str(String::new()));
    }

    #[test]
    fn test_value_is_returned_verbatim() {
        let env = MapEnvironment::empty().with_var("LDAP_SERVER_PORT", " 636 ");
        assert_eq!(resolve(&env, "LDAP_SERVER_PORT", 389), SettingValue::from(" 636 "));
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        let env = MapEnvironment::empty().with_var("K", "__empty__");
        assert_eq!(resolve(&env, "K", "d"), SettingValue::from("__empty__"));
    }

    #[test]
    fn test_value_source() {
        let env = MapEnvironment::empty().with_vars(&[
            ("SET", "v"),
            ("BLANK", ""),
            ("FORCED", EMPTY_SENTINEL),
        ]);
        assert_eq!(value_source(&env, "SET"), ValueSource::Environment);
        assert_eq!(value_source(&env, "BLANK"), ValueSource::Fallback);
        assert_eq!(value_source(&env, "MISSING"), ValueSource::Fallback);
        assert_eq!(value_source(&env, "FORCED"), ValueSource::ForcedEmpty);
    }

    #[test]
    fn test_string_accessor() {
        let env = MapEnvironment::empty()
            .with_var("APP_NAME", "NTB Desk")
            .with_var("LDAP_FQDN", EMPTY_SENTINEL);
        let resolver = Resolver::new(&env);
        assert_eq!(resolver.string("APP_NAME", "Superdesk"), "NTB Desk");
        assert_eq!(resolver.string("LDAP_FQDN", "ntb.no"), "");
        assert_eq!(resolver.string("MACROS_MODULE", "ntb.macros"), "ntb.macros");
    }

    #[test]
    fn test_optional_string_accessor() {
        let env = MapEnvironment::empty()
            .with_var("A", "1")
            .with_var("B", EMPTY_SENTINEL);
        let resolver = Resolver::new(&env);
        assert_eq!(resolver.optional_string("A").as_deref(), Some("1"));
        assert_eq!(resolver.optional_string("B").as_deref(), Some(""));
        assert_eq!(resolver.optional_string("C"), None);
    }

    #[test]
    fn test_integer_accessor() {
        let env = MapEnvironment::empty()
            .with_var("WSPORT", "5200")
            .with_var("BAD", "not-a-port")
            .with_var("EMPTY", EMPTY_SENTINEL);
        let resolver = Resolver::new(&env);

        assert_eq!(resolver.integer::<u16>("WSPORT", 5100).unwrap(), Some(5200));
        assert_eq!(resolver.integer::<u16>("UNSET", 5100).unwrap(), Some(5100));

        let err = resolver.integer::<u16>("BAD", 5100).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidInteger { ref key, ref value } if key == "BAD" && value == "not-a-port"
        ));
        assert_eq!(resolver.integer::<u16>("EMPTY", 5100).unwrap(), None);
    }

    #[test]
    fn test_integer_out_of_range() {
        let env = MapEnvironment::empty().with_var("LDAP_SERVER_PORT", "70000");
        let resolver = Resolver::new(&env);
        assert!(resolver.integer::<u16>("LDAP_SERVER_PORT", 389).is_err());
    }

    #[test]
    fn test_boolean_accessor() {
        let env = MapEnvironment::empty()
            .with_vars(&[("T", "True"), ("F", "off"), ("E", EMPTY_SENTINEL), ("X", "maybe")]);
        let resolver = Resolver::new(&env);

        assert!(resolver.boolean("T", false).unwrap());
        assert!(!resolver.boolean("F", true).unwrap());
        assert!(!resolver.boolean("E", true).unwrap());
        assert!(resolver.boolean("UNSET", true).unwrap());
        assert!(matches!(
            resolver.boolean("X", false),
            Err(SettingsError::InvalidBoolean { .. })
        ));
    }

    #[test]
    fn test_json_accessor() {
        let env = MapEnvironment::empty().with_var("MAP", r#"{"uid": "username"}"#);
        let resolver = Resolver::new(&env);

        let map: BTreeMap<String, String> = resolver.json("MAP", "{}").unwrap();
        assert_eq!(map["uid"], "username");

        let default: BTreeMap<String, String> = resolver.json("UNSET", r#"{"a": "b"}"#).unwrap();
        assert_eq!(default["a"], "b");
    }

    #[test]
    fn test_json_malformed_is_error() {
        let env = MapEnvironment::empty().with_var("MAP", "{not json");
        let resolver = Resolver::new(&env);
        let result: SettingsResult<BTreeMap<String, String>> = resolver.json("MAP", "{}");
        assert!(matches!(result, Err(SettingsError::MalformedJson { ref key, .. }) if key == "MAP"));
    }

    #[test]
    fn test_json_forced_empty_is_error() {
        let env = MapEnvironment::empty().with_var("MAP", EMPTY_SENTINEL);
        let resolver = Resolver::new(&env);
        let result: SettingsResult<BTreeMap<String, String>> = resolver.json("MAP", "{}");
        assert!(result.is_err());
    }
}
