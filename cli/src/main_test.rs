use super::*;
use clap::CommandFactory;

#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn org_flag_is_global() {
    let cli = Cli::try_parse_from(["railgun", "list", "--direction", "desc", "--org", "org1"]).unwrap();
    assert_eq!(cli.org, "org1");
    assert!(matches!(cli.command, Command::List { direction } if direction == "desc"));
}

#[test]
fn list_direction_defaults_to_empty() {
    let cli = Cli::try_parse_from(["railgun", "list"]).unwrap();
    assert!(matches!(cli.command, Command::List { direction } if direction.is_empty()));
}

#[test]
fn zone_connect_takes_zone_then_railgun() {
    let cli = Cli::try_parse_from(["railgun", "zone", "connect", "z1", "r1"]).unwrap();
    let Command::Zone(zone) = cli.command else {
        panic!("expected zone command");
    };
    assert!(matches!(
        zone.command,
        ZoneSubcommand::Connect { zone_id, railgun_id } if zone_id == "z1" && railgun_id == "r1"
    ));
}

#[test]
fn zone_test_requires_both_ids() {
    assert!(Cli::try_parse_from(["railgun", "zone", "test", "z1"]).is_err());
}

#[test]
fn error_codes_pass_through() {
    let err = CliError::from(ApiError::MissingCredentials("CF_API_TOKEN".into()));
    assert_eq!(err.error_code(), "E_MISSING_CREDENTIALS");
    assert_eq!(err.to_string(), "missing credentials: set CF_API_TOKEN");
    assert!(!err.retryable());

    let err = CliError::from(RailgunError::Request(ApiError::Transport("reset".into())));
    assert_eq!(err.error_code(), "E_REQUEST");
    assert!(err.retryable());
}

#[test]
fn output_errors_are_not_retryable() {
    let err = CliError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
    assert_eq!(err.error_code(), "E_OUTPUT");
    assert!(!err.retryable());
}

#[test]
fn org_flag_falls_back_to_env() {
    let cli = Cli::try_parse_from(["railgun", "list"]).unwrap();
    let expected = std::env::var("CF_ORGANIZATION_ID").unwrap_or_default();
    assert_eq!(cli.org, expected);

    let cli = Cli::try_parse_from(["railgun", "--org", "org2", "list"]).unwrap();
    assert_eq!(cli.org, "org2");
}
