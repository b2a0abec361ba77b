//! Settings resolution against the real process environment.

use superdesk_settings::{
    load_settings, AuthBackend, ProcessEnvironment, SettingsError, SettingsLoader,
};

/// Every variable the loader reads, cleared so the host environment cannot leak in.
const ALL_VARS: &[&str] = &[
    "LOG_CONFIG_FILE",
    "APP_NAME",
    "SUPERDESK_URL",
    "SUPERDESK_CLIENT_URL",
    "LDAP_SERVER",
    "LDAP_SERVER_PORT",
    "LDAP_FQDN",
    "LDAP_BASE_FILTER",
    "LDAP_USER_FILTER",
    "LDAP_USER_ATTRIBUTES",
    "MACROS_MODULE",
    "WSHOST",
    "WSPORT",
    "ODBC_PUBLISH",
    "ODBC_TEST_CONNECTION_STRING",
    "ORGANIZATION_NAME",
    "ORGANIZATION_NAME_ABBREVIATION",
    "AMAZON_CONTAINER_NAME",
    "AMAZON_ACCESS_KEY_ID",
    "AMAZON_SECRET_ACCESS_KEY",
    "AMAZON_REGION",
    "AMAZON_SERVE_DIRECT_LINKS",
    "AMAZON_S3_USE_HTTPS",
    "SUPERDESK_TESTING",
];

fn with_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut kvs: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
    for (key, value) in vars {
        kvs.retain(|(k, _)| k != key);
        kvs.push((*key, Some(*value)));
    }
    temp_env::with_vars(kvs, f)
}

#[test]
fn test_defaults_from_clean_environment() {
    let settings = with_env(&[], || load_settings(&ProcessEnvironment)).unwrap();

    assert_eq!(settings.application_name, "Superdesk");
    assert_eq!(settings.server.protocol.as_deref(), Some("http"));
    assert_eq!(settings.server.server_name.as_deref(), Some("localhost:5000"));
    assert_eq!(settings.server.url_prefix, "api");
    assert_eq!(settings.auth_backend(), AuthBackend::Local);
    assert_eq!(settings.macros_module, "ntb.macros");
    assert_eq!(settings.ws_port, Some(5100));
    assert_eq!(settings.organization_name_abbreviation, "NTB");
    assert_eq!(settings.newsml_provider_id, "ntb.no");
    assert_eq!(settings.editorial.default_timezone, "Europe/Oslo");
}

#[test]
fn test_server_url_with_port_80() {
    let settings = with_env(&[("SUPERDESK_URL", "http://example.org:80/x")], || {
        load_settings(&ProcessEnvironment)
    })
    .unwrap();

    assert_eq!(settings.server.protocol.as_deref(), Some("http"));
    assert_eq!(settings.server.server_name.as_deref(), Some("example.org"));
    assert_eq!(settings.server.url_prefix, "x");
}

#[test]
fn test_ldap_fork() {
    let ldap = with_env(&[("LDAP_SERVER", "ldap://ad.ntb.no")], || {
        load_settings(&ProcessEnvironment)
    })
    .unwrap();
    assert_eq!(ldap.auth_backend(), AuthBackend::Ldap);
    assert!(ldap.installed_apps.contains("apps.ldap"));
    assert!(!ldap.installed_apps.contains("superdesk.users"));
    assert!(!ldap.installed_apps.contains("apps.auth.db"));

    let local = with_env(&[], || load_settings(&ProcessEnvironment)).unwrap();
    assert_eq!(local.auth_backend(), AuthBackend::Local);
    assert!(!local.installed_apps.contains("apps.ldap"));
    assert!(local.installed_apps.contains("superdesk.users"));
    assert!(local.installed_apps.contains("apps.auth.db"));
}

#[test]
fn test_malformed_ldap_attributes_abort_loading() {
    let result = with_env(&[("LDAP_USER_ATTRIBUTES", "{givenName: first_name}")], || {
        load_settings(&ProcessEnvironment)
    });

    match result {
        Err(SettingsError::MalformedJson { key, .. }) => assert_eq!(key, "LDAP_USER_ATTRIBUTES"),
        other => panic!("Expected MalformedJson, got {other:?}"),
    }
}

#[test]
fn test_forced_empty_overrides_defaults() {
    let settings = with_env(
        &[
            ("ORGANIZATION_NAME", "__EMPTY__"),
            ("AMAZON_REGION", "__EMPTY__"),
            ("ODBC_PUBLISH", "__EMPTY__"),
            ("LDAP_SERVER_PORT", "__EMPTY__"),
        ],
        || load_settings(&ProcessEnvironment),
    )
    .unwrap();

    assert_eq!(settings.organization_name, "");
    assert_eq!(settings.amazon.region, "");
    assert_eq!(settings.odbc.publish.as_deref(), Some(""));
    assert!(!settings.odbc.publish_enabled());
    assert_eq!(settings.ldap.server_port, None);
}

#[test]
fn test_testing_mode() {
    let settings = with_env(&[("SUPERDESK_TESTING", "True")], || {
        load_settings(&ProcessEnvironment)
    })
    .unwrap();
    assert!(settings.testing);
    assert!(settings.elasticsearch.force_refresh);
    assert!(!settings.elasticsearch.auto_aggregations);
}

#[test]
fn test_base_dir_controls_data_paths() {
    let dir = tempfile::tempdir().unwrap();
    let settings = with_env(&[], || {
        SettingsLoader::from_process().with_base_dir(dir.path()).load()
    })
    .unwrap();

    assert_eq!(settings.data_paths.init_data_path, dir.path().join("data"));
    assert_eq!(
        settings.data_paths.locators_data_file,
        dir.path().join("data").join("locators.json")
    );
}

#[test]
fn test_settings_serialize_for_inspection() {
    let settings = with_env(&[("LDAP_SERVER", "ldap://ad.ntb.no")], || {
        load_settings(&ProcessEnvironment)
    })
    .unwrap();

    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["installed_apps"]["auth_backend"], "ldap");
    assert_eq!(json["ldap"]["server_port"], 389);
    assert_eq!(json["server"]["url_prefix"], "api");
    assert_eq!(json["renditions"]["picture"]["thumbnail"]["width"], 220);
    assert_eq!(json["nifs"]["qcode_map"]["1"], "15054000");
}
