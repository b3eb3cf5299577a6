//! Fixture accounts the mocked login matches against.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::config::AuthConfig;
use crate::domain::User;
use crate::error::DashboardError;
use crate::types::Role;

/// The single password every fixture account accepts.
pub const DEMO_PASSWORD: &str = "password123";

/// Default trial length granted to the trial fixture account.
pub const TRIAL_PERIOD_DAYS: i64 = 14;

/// Longest trial period a configuration may ask for.
pub const MAX_TRIAL_PERIOD_DAYS: i64 = 36_500;

/// End of a trial of `days` days starting at `now`.
pub fn trial_expiry(now: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, DashboardError> {
    if !(0..=MAX_TRIAL_PERIOD_DAYS).contains(&days) {
        return Err(DashboardError::Config(format!(
            "trialPeriodDays must be between 0 and {MAX_TRIAL_PERIOD_DAYS}, got {days}"
        )));
    }
    Duration::try_days(days)
        .and_then(|period| now.checked_add_signed(period))
        .ok_or_else(|| DashboardError::Config(format!("trial of {days} days from {now} is out of range")))
}

/// Lookup of known accounts by email.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        UserDirectory { users }
    }

    /// The four fixture accounts. Timestamps that track the login moment
    /// (creation, last login, trial start) use `now`.
    pub fn fixtures(now: DateTime<Utc>, trial_period_days: i64) -> Result<Self, DashboardError> {
        Ok(Self::with_trial_expiry(now, trial_expiry(now, trial_period_days)?))
    }

    /// Fixture accounts with the trial period taken from `auth`.
    pub fn from_config(auth: &AuthConfig, now: DateTime<Utc>) -> Result<Self, DashboardError> {
        Self::fixtures(now, auth.trial_period_days)
    }

    fn with_trial_expiry(now: DateTime<Utc>, trial_expires_at: DateTime<Utc>) -> Self {
        let jan = |day| Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).single().unwrap_or(now);
        UserDirectory::new(vec![
            User {
                id: "1".into(),
                email: "admin@constructionsite.com".into(),
                name: "John Smith".into(),
                role: Role::Admin,
                company: Some("BuildCorp Construction".into()),
                avatar: Some("/construction-manager.png".into()),
                created_at: jan(1),
                last_login: Some(now),
                trial_expires_at: None,
            },
            User {
                id: "2".into(),
                email: "manager@constructionsite.com".into(),
                name: "Sarah Johnson".into(),
                role: Role::User,
                company: Some("BuildCorp Construction".into()),
                avatar: Some("/project-manager-team.png".into()),
                created_at: jan(15),
                last_login: Some(now),
                trial_expires_at: None,
            },
            User {
                id: "3".into(),
                email: "demo@constructionsite.com".into(),
                name: "Demo User".into(),
                role: Role::Demo,
                company: Some("Demo Company".into()),
                avatar: Some("/demo-user-profile.png".into()),
                created_at: now,
                last_login: Some(now),
                trial_expires_at: None,
            },
            User {
                id: "4".into(),
                email: "trial@constructionsite.com".into(),
                name: "Trial User".into(),
                role: Role::Trial,
                company: Some("Trial Company".into()),
                avatar: Some("/trial-user-badge.png".into()),
                created_at: now,
                last_login: Some(now),
                trial_expires_at: Some(trial_expires_at),
            },
        ])
    }

    /// Exact, case-sensitive email match.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        let now = Utc::now();
        let expires = now.checked_add_signed(Duration::days(TRIAL_PERIOD_DAYS)).unwrap_or(now);
        UserDirectory::with_trial_expiry(now, expires)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_roles() {
        let dir = UserDirectory::default();
        let role_of = |email| dir.find_by_email(email).map(|u| u.role);
        assert_eq!(role_of("admin@constructionsite.com"), Some(Role::Admin));
        assert_eq!(role_of("manager@constructionsite.com"), Some(Role::User));
        assert_eq!(role_of("demo@constructionsite.com"), Some(Role::Demo));
        assert_eq!(role_of("trial@constructionsite.com"), Some(Role::Trial));
        assert_eq!(role_of("ADMIN@constructionsite.com"), None);
    }

    #[test]
    fn test_only_trial_account_expires() {
        let now = Utc::now();
        let dir = UserDirectory::fixtures(now, 14).unwrap();
        for user in dir.users() {
            match user.role {
                Role::Trial => assert_eq!(user.trial_expires_at, Some(now + Duration::days(14))),
                _ => assert_eq!(user.trial_expires_at, None),
            }
        }
    }

    #[test]
    fn test_trial_period_from_config() {
        let now = Utc::now();
        let auth = AuthConfig {
            trial_period_days: 3,
            ..AuthConfig::default()
        };
        let dir = UserDirectory::from_config(&auth, now).unwrap();
        let trial = dir.find_by_email("trial@constructionsite.com").unwrap();
        assert_eq!(trial.trial_expires_at, Some(now + Duration::days(3)));
    }

    #[test]
    fn test_out_of_range_trial_period_is_an_error() {
        let now = Utc::now();
        for days in [-1, MAX_TRIAL_PERIOD_DAYS + 1, 1_000_000_000, i64::MAX, i64::MIN] {
            let err = UserDirectory::fixtures(now, days).unwrap_err();
            assert!(matches!(err, DashboardError::Config(_)), "{days}");
        }
        assert!(trial_expiry(now, MAX_TRIAL_PERIOD_DAYS).is_ok());
        assert_eq!(trial_expiry(now, 0).unwrap(), now);
    }
}
