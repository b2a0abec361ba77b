//! CLI command implementations.

pub mod apps;
pub mod check;
pub mod get;
pub mod show;

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::models::Settings;
use crate::infrastructure::config::SettingsLoader;

/// Load settings from the process environment for a command.
pub(crate) fn load_from_process(base_dir: Option<&Path>) -> Result<Settings> {
    let mut loader = SettingsLoader::from_process();
    if let Some(dir) = base_dir {
        loader = loader.with_base_dir(dir);
    }
    loader.load().context("Failed to resolve deployment settings")
}
