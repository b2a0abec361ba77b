//! superdesk-settings - deployment settings for the NTB Superdesk newsroom
//!
//! Resolves every deployment parameter of the newsroom platform from the
//! process environment once at startup and hands the host an immutable
//! [`Settings`] value.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): settings model, lookup tables, environment port
//! - **Infrastructure Layer** (`infrastructure`): environment resolver, loader, logging
//! - **CLI Layer** (`cli`): operator inspection commands
//!
//! # Example
//!
//! ```no_run
//! use superdesk_settings::{load_settings, AuthBackend, ProcessEnvironment};
//!
//! let settings = load_settings(&ProcessEnvironment)?;
//! if settings.auth_backend() == AuthBackend::Ldap {
//!     println!("LDAP at {}", settings.ldap.server);
//! }
//! # Ok::<(), superdesk_settings::SettingsError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{AuthBackend, InstalledApps, ServerUrl, SettingValue, Settings};
pub use domain::ports::{Environment, MapEnvironment, ProcessEnvironment};
pub use domain::{SettingsError, SettingsResult};
pub use infrastructure::config::{load_settings, resolve, Resolver, SettingsLoader, EMPTY_SENTINEL};
