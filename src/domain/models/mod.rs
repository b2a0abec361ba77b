//! Settings model and the static tables it carries.

pub mod catalog;
pub mod installed_apps;
pub mod server_url;
pub mod settings;
pub mod value;

pub use catalog::{
    default_languages, Language, ManualArticleDefaults, NifsMappings, RenditionSize, Renditions,
    PLANNING_EXPORT_BODY_TEMPLATE,
};
pub use installed_apps::{AuthBackend, InstalledApps};
pub use server_url::ServerUrl;
pub use settings::{
    AmazonSettings, DataPaths, EditorialSettings, ElasticsearchSettings, IngestSettings,
    LdapSettings, OdbcSettings, Settings,
};
pub use value::SettingValue;
