//! Ordered list of application modules the host activates at startup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Modules loaded ahead of the authentication backend.
const HEAD_APPS: &[&str] = &[
    "apps.auth",
    "superdesk.roles",
    "ntb.scanpix",
    "ntb.io",
    "ntb.publish",
];

const LDAP_APPS: &[&str] = &["apps.ldap"];

const LOCAL_APPS: &[&str] = &["superdesk.users", "apps.auth.db"];

/// Modules loaded after the authentication backend. `apps.auth` repeats here
/// as it does in the stock deployment; the host ignores the second entry.
const TAIL_APPS: &[&str] = &[
    "superdesk.upload",
    "superdesk.sequences",
    "superdesk.notification",
    "superdesk.activity",
    "superdesk.vocabularies",
    "superdesk.profiling",
    "superdesk.backend_meta",
    "apps.comments",
    "superdesk.io",
    "superdesk.io.feeding_services",
    "superdesk.io.feed_parsers",
    "superdesk.io.subjectcodes",
    "superdesk.io.iptc",
    "apps.io",
    "apps.io.feeding_services",
    "superdesk.publish",
    "superdesk.commands",
    "superdesk.locators",
    "apps.auth",
    "apps.archive",
    "apps.stages",
    "apps.desks",
    "apps.tasks",
    "apps.preferences",
    "apps.spikes",
    "apps.prepopulate",
    "apps.legal_archive",
    "apps.search",
    "apps.saved_searches",
    "apps.privilege",
    "apps.rules",
    "apps.highlights",
    "apps.products",
    "apps.publish",
    "apps.publish.enqueue",
    "apps.publish.formatters",
    "apps.content_filters",
    "apps.content_types",
    "apps.dictionaries",
    "apps.duplication",
    "apps.spellcheck",
    "apps.templates",
    "apps.archived",
    "apps.validators",
    "apps.validate",
    "apps.workspace",
    "apps.macros",
    "apps.archive_broadcast",
    "apps.search_providers",
    "apps.feature_preview",
    "apps.workqueue",
    "apps.picture_crop",
    "apps.languages",
    "ntb.macros",
    "planning",
];

/// Where users authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthBackend {
    /// Directory server, selected when an LDAP server address is configured.
    Ldap,
    /// Local user store with database-backed passwords.
    Local,
}

impl AuthBackend {
    /// LDAP when a server address is configured, local otherwise.
    pub fn from_ldap_server(ldap_server: &str) -> Self {
        if ldap_server.is_empty() {
            Self::Local
        } else {
            Self::Ldap
        }
    }

    /// Modules that implement this backend, in load order.
    pub const fn apps(self) -> &'static [&'static str] {
        match self {
            Self::Ldap => LDAP_APPS,
            Self::Local => LOCAL_APPS,
        }
    }
}

impl fmt::Display for AuthBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ldap => f.write_str("ldap"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// Installed module identifiers together with the backend that chose them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledApps {
    /// Backend that picked the authentication modules
    pub auth_backend: AuthBackend,
    /// Module identifiers in load order
    pub apps: Vec<&'static str>,
}

impl InstalledApps {
    /// Full module list for `auth_backend`.
    pub fn assemble(auth_backend: AuthBackend) -> Self {
        let apps = HEAD_APPS
            .iter()
            .chain(auth_backend.apps())
            .chain(TAIL_APPS)
            .copied()
            .collect();

        Self { auth_backend, apps }
    }

    /// Whether `app` is installed.
    pub fn contains(&self, app: &str) -> bool {
        self.apps.iter().any(|a| *a == app)
    }

    /// Modules in load order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.apps.iter().copied()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Always `false` for an assembled list.
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
