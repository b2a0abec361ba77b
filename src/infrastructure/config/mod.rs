//! Settings resolution infrastructure
//!
//! - Environment lookup with fallbacks and the forced-empty marker
//! - Typed accessors (string, integer, boolean, JSON)
//! - One-pass settings loader

pub mod loader;
pub mod resolver;

pub use loader::{load_settings, SettingsLoader};
pub use resolver::{resolve, value_source, Resolver, ValueSource, EMPTY_SENTINEL};
