//! Implementation of the `superdesk-settings apps` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::cli::output::{output, table, CommandOutput};
use crate::domain::models::{AuthBackend, InstalledApps};

/// Arguments for `apps`.
#[derive(Args, Debug)]
pub struct AppsArgs {
    /// Only print whether this module is installed
    #[arg(long)]
    pub contains: Option<String>,
}

#[derive(Debug, Serialize)]
/// Installed modules and the backend that chose them.
pub struct AppsOutput {
    /// Authentication backend
    pub auth_backend: AuthBackend,
    /// Modules in load order
    pub apps: Vec<&'static str>,
    /// Probed module and whether it is installed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<(String, bool)>,
}

impl AppsOutput {
    /// Output for `installed`, optionally probing one module.
    pub fn new(installed: &InstalledApps, probe: Option<&str>) -> Self {
        Self {
            auth_backend: installed.auth_backend,
            apps: installed.iter().collect(),
            contains: probe.map(|app| (app.to_string(), installed.contains(app))),
        }
    }
}

impl CommandOutput for AppsOutput {
    fn to_human(&self) -> String {
        if let Some((app, installed)) = &self.contains {
            let verdict = if *installed { "installed" } else { "not installed" };
            return format!("{app}: {verdict}");
        }

        let rows = self
            .apps
            .iter()
            .enumerate()
            .map(|(i, app)| vec![(i + 1).to_string(), (*app).to_string()]);
        format!(
            "Authentication backend: {}\n{}",
            self.auth_backend,
            table(&["#", "Module"], rows)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run `apps`.
pub fn execute(args: &AppsArgs, base_dir: Option<&Path>, json_mode: bool) -> Result<()> {
    let settings = super::load_from_process(base_dir)?;
    output(
        &AppsOutput::new(&settings.installed_apps, args.contains.as_deref()),
        json_mode,
    );
    Ok(())
}
