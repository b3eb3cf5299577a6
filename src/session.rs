//!
//! Explicit authentication session.
//!
//! A `Session` owns the account directory and auth settings it was built with.
//! Every permission question the dashboard asks goes through the role of the
//! signed-in user; with nobody signed in, nothing is permitted and the sidebar
//! is empty.

use std::thread;

use chrono::{DateTime, Utc};

use crate::access::{filter_visible_nav_items, has_permission, sidebar_items, NavItem};
use crate::config::{AuthConfig, DashboardConfig};
use crate::domain::User;
use crate::error::DashboardError;
use crate::fixtures::UserDirectory;
use crate::types::{Capability, Role};

#[derive(Debug, Clone)]
pub struct Session {
    directory: UserDirectory,
    auth: AuthConfig,
    user: Option<User>,
}

impl Session {
    pub fn new(directory: UserDirectory, auth: AuthConfig) -> Self {
        Session {
            directory,
            auth,
            user: None,
        }
    }

    /// Session over the fixture accounts, with the configured trial period
    /// applied to the trial account.
    pub fn from_config(config: &DashboardConfig, now: DateTime<Utc>) -> Result<Self, DashboardError> {
        let directory = UserDirectory::from_config(&config.auth, now)?;
        Ok(Session::new(directory, config.auth.clone()))
    }

    /// Signs in against the wall clock after the configured delay.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, DashboardError> {
        let delay = self.auth.login_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        self.login_at(email, password, Utc::now())
    }

    /// Signs in with an explicit clock and no delay.
    ///
    /// On failure an existing session is left as it was.
    pub fn login_at(&mut self, email: &str, password: &str, now: DateTime<Utc>) -> Result<&User, DashboardError> {
        let account = match self.directory.find_by_email(email) {
            Some(account) if password == self.auth.demo_password => account,
            _ => {
                tracing::warn!(email, "login rejected");
                return Err(DashboardError::InvalidCredentials);
            }
        };
        if self.auth.enforce_trial_expiry && account.role == Role::Trial && account.trial_expired_at(now) {
            tracing::warn!(email, "trial expired");
            return Err(DashboardError::TrialExpired);
        }

        let mut user = account.clone();
        user.last_login = Some(now);
        tracing::info!(user_id = %user.id, role = %user.role, "signed in");
        Ok(&*self.user.insert(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "signed out");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_permission(&self, capability: Capability) -> bool {
        self.role().is_some_and(|role| has_permission(role, capability))
    }

    /// Like `has_permission`, but as a `Result` for guarding actions.
    pub fn require(&self, capability: Capability) -> Result<&User, DashboardError> {
        let user = self.user.as_ref().ok_or(DashboardError::NotAuthenticated)?;
        if has_permission(user.role, capability) {
            Ok(user)
        } else {
            Err(DashboardError::PermissionDenied(capability))
        }
    }

    /// Sidebar entries for the signed-in role, in display order.
    pub fn visible_nav_items(&self) -> Vec<NavItem> {
        match self.role() {
            Some(role) => filter_visible_nav_items(role, &sidebar_items()),
            None => Vec::new(),
        }
    }

    pub fn auth_config(&self) -> &AuthConfig {
        &self.auth
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    const ADMIN: &str = "admin@constructionsite.com";
    const TRIAL: &str = "trial@constructionsite.com";

    fn session(auth: AuthConfig) -> Session {
        Session::new(UserDirectory::from_config(&auth, Utc::now()).unwrap(), auth)
    }

    #[test]
    fn test_login_and_logout() {
        let mut s = session(AuthConfig::instant());
        assert!(!s.is_authenticated());
        let user = s.login(ADMIN, "password123").unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.name, "John Smith");
        assert!(s.has_permission(Capability::ManageUsers));

        s.logout();
        assert!(!s.is_authenticated());
        assert!(!s.has_permission(Capability::ManageUsers));
        s.logout();
    }

    #[test]
    fn test_login_stamps_last_login() {
        let mut s = session(AuthConfig::instant());
        let now = Utc::now() + Duration::hours(3);
        let user = s.login_at(ADMIN, "password123", now).unwrap();
        assert_eq!(user.last_login, Some(now));
    }

    #[test]
    fn test_bad_credentials() {
        let mut s = session(AuthConfig::instant());
        let err = s.login(ADMIN, "wrong").unwrap_err();
        assert_eq!(err, DashboardError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(s.login("nobody@constructionsite.com", "password123").is_err());
        assert!(!s.is_authenticated());
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let mut s = session(AuthConfig::instant());
        s.login(ADMIN, "password123").unwrap();
        assert!(s.login("demo@constructionsite.com", "nope").is_err());
        assert_eq!(s.role(), Some(Role::Admin));
    }

    #[test]
    fn test_unauthenticated_session_sees_no_nav() {
        let s = session(AuthConfig::instant());
        assert!(s.visible_nav_items().is_empty());
        assert_eq!(s.require(Capability::ApproveForms).unwrap_err(), DashboardError::NotAuthenticated);
    }

    #[test]
    fn test_require_checks_role() {
        let mut s = session(AuthConfig::instant());
        s.login("manager@constructionsite.com", "password123").unwrap();
        assert!(s.require(Capability::ApproveForms).is_err());
        assert!(s.require(Capability::ManageProjects).is_ok());
    }

    #[test]
    fn test_from_config_applies_trial_period() {
        let now = Utc::now();
        let config = DashboardConfig {
            auth: AuthConfig {
                trial_period_days: 2,
                enforce_trial_expiry: true,
                ..AuthConfig::instant()
            },
            ..DashboardConfig::default()
        };
        let mut s = Session::from_config(&config, now).unwrap();
        let trial = s.directory().find_by_email(TRIAL).unwrap();
        assert_eq!(trial.trial_expires_at, Some(now + Duration::days(2)));
        assert_eq!(
            s.login_at(TRIAL, "password123", now + Duration::days(3)).unwrap_err(),
            DashboardError::TrialExpired
        );
        assert!(s.login_at(TRIAL, "password123", now + Duration::days(1)).is_ok());
    }

    #[test]
    fn test_from_config_rejects_bad_trial_period() {
        let mut config = DashboardConfig::default();
        config.auth.trial_period_days = 1_000_000_000;
        assert!(matches!(Session::from_config(&config, Utc::now()), Err(DashboardError::Config(_))));
    }

    #[test]
    fn test_trial_expiry_is_opt_in() {
        let later = Utc::now() + Duration::days(30);

        let mut lax = session(AuthConfig::instant());
        assert!(lax.login_at(TRIAL, "password123", later).is_ok());

        let mut strict = session(AuthConfig {
            enforce_trial_expiry: true,
            ..AuthConfig::instant()
        });
        assert!(strict.login_at(TRIAL, "password123", Utc::now()).is_ok());
        strict.logout();
        assert_eq!(strict.login_at(TRIAL, "password123", later).unwrap_err(), DashboardError::TrialExpired);
        assert!(!strict.is_authenticated());
    }
}
