//! The resolved settings aggregate.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::catalog::{Language, ManualArticleDefaults, NifsMappings, Renditions};
use super::installed_apps::{AuthBackend, InstalledApps};
use super::server_url::ServerUrl;

/// Fully resolved deployment settings.
///
/// Built once by [`load_settings`](crate::load_settings) and never mutated
/// afterwards; hand out clones or references to consumers.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Logging configuration file for the host (`LOG_CONFIG_FILE`)
    pub log_config_file: String,

    /// Name shown in the client and in outgoing mail (`APP_NAME`)
    pub application_name: String,

    /// Public API address split into its routing parts (`SUPERDESK_URL`)
    pub server: ServerUrl,

    /// Address the web client is served from (`SUPERDESK_CLIENT_URL`)
    pub client_url: String,

    /// Host name the API server binds to
    pub server_domain: String,

    /// Application modules activated at startup, in load order
    pub installed_apps: InstalledApps,

    /// Directory-server login
    pub ldap: LdapSettings,

    /// Deployment data files
    pub data_paths: DataPaths,

    /// Python module the newsroom macros are loaded from (`MACROS_MODULE`)
    pub macros_module: String,

    /// Notification websocket bind address (`WSHOST`)
    pub ws_host: String,

    /// Notification websocket port (`WSPORT`); `None` when forced empty
    pub ws_port: Option<u16>,

    /// Legacy news database publishing
    pub odbc: OdbcSettings,

    /// Provider id stamped on NewsML output
    pub newsml_provider_id: String,

    /// Organization name (`ORGANIZATION_NAME`)
    pub organization_name: String,

    /// Short organization name (`ORGANIZATION_NAME_ABBREVIATION`)
    pub organization_name_abbreviation: String,

    /// S3 media storage
    pub amazon: AmazonSettings,

    /// `SUPERDESK_TESTING` was set to `true`.
    pub testing: bool,

    /// Search index behavior
    pub elasticsearch: ElasticsearchSettings,

    /// Newsroom-facing defaults
    pub editorial: EditorialSettings,

    /// Ingest tuning
    pub ingest: IngestSettings,

    /// Idle time before a session expires, in minutes
    pub session_expiry_minutes: u32,

    /// Request profiling in the host
    pub enable_profiling: bool,

    /// Image rendition sizes
    pub renditions: Renditions,

    /// Content languages offered in the client
    pub languages: Vec<Language>,

    /// NIFS sports-data mappings
    pub nifs: NifsMappings,

    /// Body template for planning exports
    pub planning_export_body_template: &'static str,
}

impl Settings {
    /// Backend chosen by the LDAP server setting.
    pub const fn auth_backend(&self) -> AuthBackend {
        self.installed_apps.auth_backend
    }
}

/// Directory-server login settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LdapSettings {
    /// Empty when LDAP is not used.
    pub server: String,

    /// Directory server port; `None` when forced empty
    pub server_port: Option<u16>,

    /// Fully qualified domain name, e.g. `sourcefabric.org`.
    pub fqdn: String,

    /// Restricts lookups to a security group.
    pub base_filter: String,

    /// `{}` is replaced with the account name.
    pub user_filter: String,

    /// LDAP attribute name to user model field.
    pub user_attributes: BTreeMap<String, String>,
}

/// Files shipped with the deployment, relative to its base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPaths {
    /// Deployment root
    pub base_dir: PathBuf,

    /// Seed data loaded by `app:initialize_data`
    pub init_data_path: PathBuf,

    /// Place-name locators for datelines
    pub locators_data_file: PathBuf,
}

impl DataPaths {
    /// Paths for a deployment rooted at `base_dir`.
    pub fn under(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let init_data_path = base_dir.join("data");
        let locators_data_file = init_data_path.join("locators.json");
        Self {
            base_dir,
            init_data_path,
            locators_data_file,
        }
    }
}

/// Publishing into the legacy news database over ODBC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OdbcSettings {
    /// Raw `ODBC_PUBLISH` value; unset when not configured
    pub publish: Option<String>,

    /// Connection string used by the ODBC publish tests
    pub test_connection_string: String,
}

impl OdbcSettings {
    /// ODBC publishing is on when `ODBC_PUBLISH` holds any non-empty value.
    pub fn publish_enabled(&self) -> bool {
        self.publish.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// S3 media storage. Empty container name means media stays in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmazonSettings {
    /// Bucket name (`AMAZON_CONTAINER_NAME`)
    pub container_name: String,

    /// Access key id (`AMAZON_ACCESS_KEY_ID`)
    pub access_key_id: String,

    /// Secret access key (`AMAZON_SECRET_ACCESS_KEY`)
    pub secret_access_key: String,

    /// Bucket region (`AMAZON_REGION`)
    pub region: String,

    /// Hand clients bucket URLs instead of proxying media
    pub serve_direct_links: bool,

    /// Use HTTPS for direct links
    pub s3_use_https: bool,
}

impl AmazonSettings {
    /// Whether media is stored in S3.
    pub fn enabled(&self) -> bool {
        !self.container_name.is_empty()
    }
}

/// Search index behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElasticsearchSettings {
    /// Refresh the index after every write; on in testing mode
    pub force_refresh: bool,

    /// Compute aggregations on every search
    pub auto_aggregations: bool,
}

/// Newsroom-facing defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorialSettings {
    /// Metadata stamped on articles created by hand
    pub manual_article_defaults: ManualArticleDefaults,

    /// User field used as the article sign-off
    pub sign_off_mapping: String,

    /// Content profile preselected for new articles
    pub default_content_type: String,

    /// Language preselected for new articles
    pub default_language: String,

    /// Timezone used for scheduling and datelines
    pub default_timezone: String,

    /// Short GUIDs for new items
    pub generate_short_guid: bool,

    /// Disable the "takes" workflow
    pub no_takes: bool,
}

impl Default for EditorialSettings {
    fn default() -> Self {
        Self {
            manual_article_defaults: ManualArticleDefaults::default(),
            sign_off_mapping: "email".to_string(),
            default_content_type: "Standard".to_string(),
            default_language: "nb-NO".to_string(),
            default_timezone: "Europe/Oslo".to_string(),
            generate_short_guid: true,
            no_takes: true,
        }
    }
}

/// Ingest tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestSettings {
    /// FTP feed timeout, in seconds
    pub ftp_timeout_secs: u32,

    /// Skip IPTC subject code enrichment on ingest
    pub skip_iptc_codes: bool,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            ftp_timeout_secs: 30,
            skip_iptc_codes: true,
        }
    }
}
