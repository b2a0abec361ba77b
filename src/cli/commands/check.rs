//! Implementation of the `superdesk-settings check` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{AuthBackend, Settings};

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Also require the data directory to exist
    #[arg(long)]
    pub require_data: bool,
}

#[derive(Debug, Serialize)]
/// Summary of a successful load.
pub struct CheckOutput {
    /// Always `true`; failures exit through the error path
    pub success: bool,
    /// Authentication backend
    pub auth_backend: AuthBackend,
    /// Number of installed modules
    pub installed_apps: usize,
    /// Reassembled server URL, when complete
    pub server_base_url: Option<String>,
    /// Suspicious but valid combinations
    pub warnings: Vec<String>,
}

impl CheckOutput {
    /// Summarize `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut warnings = Vec::new();
        if settings.server.protocol.is_none() {
            warnings.push("SUPERDESK_URL has no scheme; protocol is unset".to_string());
        }
        if settings.server.server_name.is_none() {
            warnings.push("SUPERDESK_URL has no host; server name is unset".to_string());
        }
        if settings.auth_backend() == AuthBackend::Ldap && settings.ldap.base_filter.is_empty() {
            warnings.push("LDAP is enabled without LDAP_BASE_FILTER".to_string());
        }
        if settings.amazon.enabled() && settings.amazon.secret_access_key.is_empty() {
            warnings.push("AMAZON_CONTAINER_NAME is set without AMAZON_SECRET_ACCESS_KEY".to_string());
        }

        Self {
            success: true,
            auth_backend: settings.auth_backend(),
            installed_apps: settings.installed_apps.len(),
            server_base_url: settings.server.base_url(),
            warnings,
        }
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Settings OK: {} modules, authentication backend {}",
            self.installed_apps, self.auth_backend
        )];
        if let Some(url) = &self.server_base_url {
            lines.push(format!("Server: {url}"));
        }
        for warning in &self.warnings {
            lines.push(format!("warning: {warning}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run `check`.
pub fn execute(args: &CheckArgs, base_dir: Option<&Path>, json_mode: bool) -> Result<()> {
    let settings = super::load_from_process(base_dir)?;

    if args.require_data && !settings.data_paths.init_data_path.is_dir() {
        anyhow::bail!(
            "Data directory {} does not exist",
            settings.data_paths.init_data_path.display()
        );
    }

    output(&CheckOutput::from_settings(&settings), json_mode);
    Ok(())
}
