//! Infrastructure layer module
//!
//! This module contains the adapters that touch the outside world:
//! - Settings resolution from the environment
//! - Logging infrastructure
//!
//! Both are driven through the ports defined in the domain layer.

pub mod config;
pub mod logging;
