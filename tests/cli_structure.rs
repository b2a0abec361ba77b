use clap::Parser;
use std::path::PathBuf;

use superdesk_settings::cli::commands::get::FallbackKind;
use superdesk_settings::cli::{Cli, Commands};

#[test]
fn test_cli_help() {
    let result = Cli::try_parse_from(vec!["superdesk-settings", "--help"]);
    assert!(result.is_err()); // --help causes early exit with error
}

#[test]
fn test_cli_version() {
    let result = Cli::try_parse_from(vec!["superdesk-settings", "--version"]);
    assert!(result.is_err()); // --version causes early exit with error
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(vec!["superdesk-settings"]).is_err());
}

// ============================================================================
// Global Options Tests
// ============================================================================

#[test]
fn test_global_json_flag() {
    let cli = Cli::try_parse_from(vec!["superdesk-settings", "--json", "apps"]).unwrap();
    assert!(cli.json);

    let cli = Cli::try_parse_from(vec!["superdesk-settings", "check", "-j"]).unwrap();
    assert!(cli.json);
}

#[test]
fn test_global_base_dir() {
    let cli = Cli::try_parse_from(vec![
        "superdesk-settings",
        "show",
        "--base-dir",
        "/srv/superdesk/server",
    ])
    .unwrap();
    assert_eq!(cli.base_dir, Some(PathBuf::from("/srv/superdesk/server")));
}

// ============================================================================
// Command Tests
// ============================================================================

#[test]
fn test_show_flags() {
    let cli = Cli::try_parse_from(vec!["superdesk-settings", "show", "--reveal", "--yaml"]).unwrap();
    match cli.command {
        Commands::Show(args) => {
            assert!(args.reveal);
            assert!(args.yaml);
        }
        other => panic!("Expected Show, got {other:?}"),
    }
}

#[test]
fn test_get_defaults_to_string_fallback() {
    let cli = Cli::try_parse_from(vec!["superdesk-settings", "get", "APP_NAME"]).unwrap();
    match cli.command {
        Commands::Get(args) => {
            assert_eq!(args.key, "APP_NAME");
            assert_eq!(args.fallback, None);
            assert_eq!(args.kind, FallbackKind::String);
        }
        other => panic!("Expected Get, got {other:?}"),
    }
}

#[test]
fn test_get_typed_fallback() {
    let cli = Cli::try_parse_from(vec![
        "superdesk-settings",
        "get",
        "LDAP_SERVER_PORT",
        "--fallback",
        "389",
        "--as",
        "int",
    ])
    .unwrap();
    match cli.command {
        Commands::Get(args) => {
            assert_eq!(args.fallback.as_deref(), Some("389"));
            assert_eq!(args.kind, FallbackKind::Int);
        }
        other => panic!("Expected Get, got {other:?}"),
    }
}

#[test]
fn test_get_requires_key() {
    assert!(Cli::try_parse_from(vec!["superdesk-settings", "get"]).is_err());
}

#[test]
fn test_get_rejects_unknown_kind() {
    let result = Cli::try_parse_from(vec![
        "superdesk-settings",
        "get",
        "WSPORT",
        "--as",
        "float",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_apps_contains() {
    let cli =
        Cli::try_parse_from(vec!["superdesk-settings", "apps", "--contains", "apps.ldap"]).unwrap();
    match cli.command {
        Commands::Apps(args) => assert_eq!(args.contains.as_deref(), Some("apps.ldap")),
        other => panic!("Expected Apps, got {other:?}"),
    }
}

#[test]
fn test_check_require_data() {
    let cli = Cli::try_parse_from(vec!["superdesk-settings", "check", "--require-data"]).unwrap();
    match cli.command {
        Commands::Check(args) => assert!(args.require_data),
        other => panic!("Expected Check, got {other:?}"),
    }
}
