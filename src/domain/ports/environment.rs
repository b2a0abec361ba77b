//! Named deployment inputs.

use std::collections::HashMap;

/// Source of named deployment inputs.
///
/// Settings are loaded through this trait instead of reading the process
/// environment directly, so tests and embedding hosts can hand in their own
/// variables without touching global state.
pub trait Environment {
    /// Raw value of `key`, or `None` when it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the environment of the running process.
///
/// Variables whose value is not valid unicode are reported as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment with explicitly provided variables.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    /// Environment holding exactly `vars`.
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Environment with no variables set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set one variable.
    #[must_use]
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Set several variables at once.
    #[must_use]
    pub fn with_vars(mut self, vars: &[(&str, &str)]) -> Self {
        for (key, value) in vars {
            self.vars.insert((*key).to_string(), (*value).to_string());
        }
        self
    }
}

impl Environment for MapEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
