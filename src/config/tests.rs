//! Configuration tests
//!
//! Round-trip guards: whatever `to_toml` writes must parse back into the same
//! effective configuration. Adding a field without serializing it fails here.

use super::*;
use crate::session::models::LatLon;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    match toml::from_str(toml_str) {
        Ok(file) => file,
        Err(e) => panic!("config should parse.\nTOML:\n{toml_str}\nError: {e}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let resolved = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(resolved, config);
}

/// Every field set away from its default must survive serialization
#[test]
fn test_config_roundtrip_all_fields_changed() {
    let mut config = Config::default();
    config.theme = "Ocean".to_string();
    config.use_theme_background = false;
    config.show_logs = true;
    config.session = SessionConfig {
        user_name: "Ada Green".to_string(),
        user_email: "ada@example.org".to_string(),
        role: Role::Seller,
        score: 10,
        trees_planted: 3,
        initial_aqi: 42,
        map_zoom: 7,
        default_center: LatLon::new(51.5, -0.125),
        gps_enabled: false,
        device_location: LatLon::new(1.5, 2.25),
        seed: Some(7),
    };
    config.logging = LoggingConfig {
        level: "debug".to_string(),
        file_enabled: true,
        file_dir: std::path::PathBuf::from("/tmp/eco"),
        file_rotation: LogRotation::Hourly,
        file_prefix: "eco".to_string(),
    };

    let resolved = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(resolved, config);
}

#[test]
fn test_unset_seed_is_commented_out() {
    let toml_str = Config::default().to_toml();
    assert!(toml_str.contains("# seed = 42"));
    assert_eq!(parse(&toml_str).session.and_then(|s| s.seed), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_yields_defaults() {
    assert_eq!(Config::resolve(parse(""), no_env), Config::default());
}

#[test]
fn test_partial_session_section_keeps_other_defaults() {
    let file = parse(
        r#"
[session]
role = "seller"
initial_aqi = 80
"#,
    );
    let config = Config::resolve(file, no_env);
    assert_eq!(config.session.role, Role::Seller);
    assert_eq!(config.session.initial_aqi, 80);
    assert_eq!(config.session.user_name, "John Doe");
    assert_eq!(config.session.map_zoom, 4);
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
theme = "Ember"
[session]
role = "user"
initial_aqi = 80
"#,
    );
    let env = |key: &str| match key {
        "ECOGUARD_THEME" => Some("Ocean".to_string()),
        "ECOGUARD_ROLE" => Some("Seller".to_string()),
        "ECOGUARD_SEED" => Some("99".to_string()),
        "ECOGUARD_AQI" => Some("300".to_string()),
        _ => None,
    };
    let config = Config::resolve(file, env);
    assert_eq!(config.theme, "Ocean");
    assert_eq!(config.session.role, Role::Seller);
    assert_eq!(config.session.seed, Some(99));
    assert_eq!(config.session.initial_aqi, 300);
}

#[test]
fn test_bad_env_values_are_ignored() {
    let env = |key: &str| match key {
        "ECOGUARD_ROLE" => Some("admin".to_string()),
        "ECOGUARD_SEED" => Some("lots".to_string()),
        _ => None,
    };
    let config = Config::resolve(parse(""), env);
    assert_eq!(config.session.role, Role::User);
    assert_eq!(config.session.seed, None);
}

#[test]
fn test_unknown_role_in_file_is_a_parse_error() {
    let result: Result<FileConfig, _> = toml::from_str("[session]\nrole = \"admin\"\n");
    assert!(result.is_err());
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    let file = parse("[logging]\nfile_rotation = \"weekly\"\n");
    assert_eq!(
        Config::resolve(file, no_env).logging.file_rotation,
        LogRotation::Daily
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Session settings
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_settings_clamp_aqi_and_zoom() {
    let mut session = SessionConfig::default();
    session.initial_aqi = 900;
    session.map_zoom = 40;
    let settings = session.to_settings();
    assert_eq!(settings.initial_aqi, 500);
    assert_eq!(settings.map_zoom, 18);
}

#[test]
fn test_settings_gps_disabled_means_no_device_location() {
    let mut session = SessionConfig::default();
    assert!(session.to_settings().device_location.is_some());
    session.gps_enabled = false;
    assert_eq!(session.to_settings().device_location, None);
}

#[test]
fn test_default_settings_match_session_defaults() {
    assert_eq!(
        SessionConfig::default().to_settings(),
        crate::session::SessionSettings::default()
    );
}

#[test]
fn test_out_of_range_device_position_never_activates() {
    let file = parse(
        r#"
[session]
gps_enabled = true
device_lat = 200.0
device_lon = nan
"#,
    );
    let config = Config::resolve(file, no_env);
    let settings = config.session.to_settings();
    let services = crate::session::Services::standard(settings.device_location, Some(1));
    let mut session = crate::session::Session::new(settings, services);
    session.submit_credentials("a@b.com", "x").unwrap();

    assert_eq!(
        session.apply(crate::session::Intent::UseDeviceLocation),
        Err(crate::session::SessionError::LocationUnavailable)
    );
    assert_eq!(session.gate(), crate::session::GateStage::AwaitingLocation);
}
