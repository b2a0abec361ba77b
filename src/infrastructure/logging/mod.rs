//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Figment-loaded logging configuration
//! - JSON or pretty output, optional rolling log files
//! - Secret redaction for printed settings

pub mod config;
pub mod logger;
pub mod redaction;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
pub use redaction::SecretRedactor;
