//! One-pass construction of [`Settings`] from an environment.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::resolver::Resolver;
use crate::domain::models::{
    default_languages, AmazonSettings, AuthBackend, DataPaths, EditorialSettings,
    ElasticsearchSettings, IngestSettings, InstalledApps, LdapSettings, NifsMappings,
    OdbcSettings, Renditions, ServerUrl, Settings, PLANNING_EXPORT_BODY_TEMPLATE,
};
use crate::domain::ports::{Environment, ProcessEnvironment};
use crate::domain::SettingsResult;

/// Host logging configuration file when `LOG_CONFIG_FILE` is unset.
pub const DEFAULT_LOG_CONFIG_FILE: &str = "logging_config.yml";
/// Public API address of a local development server.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000/api";
/// Web client address of a local development server.
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:9000";
/// Standard LDAP port.
pub const DEFAULT_LDAP_PORT: u16 = 389;
/// Active Directory account lookup.
pub const DEFAULT_LDAP_USER_FILTER: &str =
    "(&(objectCategory=user)(objectClass=user)(sAMAccountName={}))";
/// Active Directory attributes copied onto the user, as JSON.
pub const DEFAULT_LDAP_USER_ATTRIBUTES: &str = r#"{"givenName": "first_name", "sn": "last_name", "displayName": "display_name", "mail": "email", "ipPhone": "phone"}"#;
/// Placeholder connection string for the ODBC publish tests.
pub const DEFAULT_ODBC_TEST_CONNECTION_STRING: &str =
    "DRIVER=FreeTDS;DSN=NEWSDB;UID=???;PWD=???;DATABASE=News";
/// Notification websocket port.
pub const DEFAULT_WS_PORT: u16 = 5100;

/// Variable that switches on testing mode. Read raw: only `true` (any case) counts.
pub const TESTING_VAR: &str = "SUPERDESK_TESTING";

/// Builds [`Settings`] from an [`Environment`].
///
/// Resolution happens in one pass; the first malformed value aborts it.
pub struct SettingsLoader<E: Environment> {
    env: E,
    base_dir: PathBuf,
}

impl SettingsLoader<ProcessEnvironment> {
    /// Loader over the process environment, rooted at the current directory.
    pub fn from_process() -> Self {
        Self::new(ProcessEnvironment)
    }
}

impl<E: Environment> SettingsLoader<E> {
    /// Loader over `env`, rooted at the current directory.
    pub fn new(env: E) -> Self {
        Self {
            env,
            base_dir: base_dir_or_relative(std::env::current_dir()),
        }
    }

    /// Directory that deployment data files (`data/…`) live under.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Resolve every setting.
    pub fn load(&self) -> SettingsResult<Settings> {
        let resolver = Resolver::new(&self.env);

        let server_url = resolver.string("SUPERDESK_URL", DEFAULT_SERVER_URL);
        let server = ServerUrl::parse(&server_url);
        debug!(
            protocol = ?server.protocol,
            server_name = ?server.server_name,
            url_prefix = %server.url_prefix,
            "server url resolved"
        );

        let ldap = Self::load_ldap(&resolver)?;
        let installed_apps = InstalledApps::assemble(AuthBackend::from_ldap_server(&ldap.server));

        let testing = self
            .env
            .var(TESTING_VAR)
            .is_some_and(|v| v.to_lowercase() == "true");

        let settings = Settings {
            log_config_file: resolver.string("LOG_CONFIG_FILE", DEFAULT_LOG_CONFIG_FILE),
            application_name: resolver.string("APP_NAME", "Superdesk"),
            server,
            client_url: resolver.string("SUPERDESK_CLIENT_URL", DEFAULT_CLIENT_URL),
            server_domain: "localhost".to_string(),
            installed_apps,
            ldap,
            data_paths: DataPaths::under(&self.base_dir),
            macros_module: resolver.string("MACROS_MODULE", "ntb.macros"),
            ws_host: resolver.string("WSHOST", "0.0.0.0"),
            ws_port: resolver.integer("WSPORT", DEFAULT_WS_PORT)?,
            odbc: OdbcSettings {
                publish: resolver.optional_string("ODBC_PUBLISH"),
                test_connection_string: resolver.string(
                    "ODBC_TEST_CONNECTION_STRING",
                    DEFAULT_ODBC_TEST_CONNECTION_STRING,
                ),
            },
            newsml_provider_id: "ntb.no".to_string(),
            organization_name: resolver.string("ORGANIZATION_NAME", "NTB"),
            organization_name_abbreviation: resolver
                .string("ORGANIZATION_NAME_ABBREVIATION", "NTB"),
            amazon: Self::load_amazon(&resolver)?,
            testing,
            elasticsearch: ElasticsearchSettings {
                force_refresh: testing,
                auto_aggregations: false,
            },
            editorial: EditorialSettings::default(),
            ingest: IngestSettings::default(),
            session_expiry_minutes: 12 * 60,
            enable_profiling: false,
            renditions: Renditions::default(),
            languages: default_languages(),
            nifs: NifsMappings::default(),
            planning_export_body_template: PLANNING_EXPORT_BODY_TEMPLATE,
        };

        info!(
            application = %settings.application_name,
            auth_backend = %settings.auth_backend(),
            installed_apps = settings.installed_apps.len(),
            testing = settings.testing,
            "settings loaded"
        );

        Ok(settings)
    }

    fn load_ldap(resolver: &Resolver<'_, E>) -> SettingsResult<LdapSettings> {
        let user_attributes: BTreeMap<String, String> =
            resolver.json("LDAP_USER_ATTRIBUTES", DEFAULT_LDAP_USER_ATTRIBUTES)?;

        Ok(LdapSettings {
            server: resolver.string("LDAP_SERVER", ""),
            server_port: resolver.integer("LDAP_SERVER_PORT", DEFAULT_LDAP_PORT)?,
            fqdn: resolver.string("LDAP_FQDN", ""),
            base_filter: resolver.string("LDAP_BASE_FILTER", ""),
            user_filter: resolver.string("LDAP_USER_FILTER", DEFAULT_LDAP_USER_FILTER),
            user_attributes,
        })
    }

    fn load_amazon(resolver: &Resolver<'_, E>) -> SettingsResult<AmazonSettings> {
        Ok(AmazonSettings {
            container_name: resolver.string("AMAZON_CONTAINER_NAME", ""),
            access_key_id: resolver.string("AMAZON_ACCESS_KEY_ID", ""),
            secret_access_key: resolver.string("AMAZON_SECRET_ACCESS_KEY", ""),
            region: resolver.string("AMAZON_REGION", "us-east-1"),
            serve_direct_links: resolver.boolean("AMAZON_SERVE_DIRECT_LINKS", false)?,
            s3_use_https: resolver.boolean("AMAZON_S3_USE_HTTPS", false)?,
        })
    }
}

/// Unusable working directory leaves data paths relative, which the host
/// resolves against wherever it runs.
fn base_dir_or_relative(current_dir: io::Result<PathBuf>) -> PathBuf {
    current_dir.unwrap_or_else(|err| {
        warn!(error = %err, "current directory unavailable, data paths are relative");
        PathBuf::new()
    })
}

/// Resolve settings from `env`, with data paths under the current directory.
pub fn load_settings(env: &impl Environment) -> SettingsResult<Settings> {
    SettingsLoader::new(env).load()
}
