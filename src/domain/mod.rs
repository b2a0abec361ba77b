//! Domain layer for deployment settings
//!
//! This module contains the settings model and the ports it is loaded through.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{SettingsError, SettingsResult};
