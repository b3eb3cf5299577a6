use std::io::Write;

use chrono::{Duration, Utc};
use sitepro_core::{AuthConfig, DashboardConfig, DashboardError, Role, Session, UserDirectory};
use tempfile::NamedTempFile;

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "auth": {{ "demoPassword": "hunter2", "loginDelayMs": 0, "enforceTrialExpiry": true }},
            "logging": {{ "level": "debug" }}
        }}"#
    )
    .unwrap();

    let config = DashboardConfig::from_path(file.path()).unwrap();
    assert_eq!(config.auth.demo_password, "hunter2");
    assert_eq!(config.auth.login_delay_ms, 0);
    assert!(config.auth.enforce_trial_expiry);
    assert_eq!(config.auth.trial_period_days, 14);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn configured_password_drives_login() {
    let config = DashboardConfig::from_json_str(r#"{"auth":{"demoPassword":"hunter2","loginDelayMs":0}}"#).unwrap();
    let mut session = Session::new(UserDirectory::default(), config.auth);
    assert!(session.login("manager@constructionsite.com", "password123").is_err());
    assert_eq!(session.login("manager@constructionsite.com", "hunter2").unwrap().role, Role::User);
}

#[test]
fn missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DashboardConfig::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DashboardError::Config(msg) if msg.contains("absent.json")));
}

#[test]
fn round_trips_through_json() {
    let config = DashboardConfig {
        auth: AuthConfig {
            enforce_trial_expiry: true,
            ..AuthConfig::instant()
        },
        ..DashboardConfig::default()
    };
    let json = config.to_json_string().unwrap();
    assert!(json.contains("\"enforceTrialExpiry\": true"));
    assert_eq!(DashboardConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn huge_trial_period_is_config_error() {
    let err = DashboardConfig::from_json_str(r#"{"auth":{"trialPeriodDays":1000000000,"loginDelayMs":0}}"#).unwrap_err();
    assert!(matches!(err, DashboardError::Config(ref msg) if msg.contains("trialPeriodDays")));

    let config = DashboardConfig {
        auth: AuthConfig {
            trial_period_days: 1_000_000_000,
            ..AuthConfig::instant()
        },
        ..DashboardConfig::default()
    };
    assert!(matches!(Session::from_config(&config, Utc::now()), Err(DashboardError::Config(_))));
    assert!(UserDirectory::from_config(&config.auth, Utc::now()).is_err());
}

#[test]
fn configured_trial_period_reaches_the_session() {
    let config = DashboardConfig::from_json_str(
        r#"{"auth":{"trialPeriodDays":3,"loginDelayMs":0,"enforceTrialExpiry":true}}"#,
    )
    .unwrap();
    let now = Utc::now();
    let mut session = Session::from_config(&config, now).unwrap();
    let trial = "trial@constructionsite.com";
    assert_eq!(
        session.directory().find_by_email(trial).unwrap().trial_expires_at,
        Some(now + Duration::days(3))
    );
    assert_eq!(
        session.login_at(trial, "password123", now + Duration::days(4)).unwrap_err(),
        DashboardError::TrialExpired
    );
    assert_eq!(session.login_at(trial, "password123", now + Duration::days(2)).unwrap().role, Role::Trial);
}
