//! Ports: interfaces the settings loader depends on.

pub mod environment;

pub use environment::{Environment, MapEnvironment, ProcessEnvironment};
