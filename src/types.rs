//! Shared enumerations used across the access, session and page modules.
//!
//! `Role` and `Capability` are the two axes of the permission table in
//! `crate::access::policy`. Both round-trip through the string identifiers
//! the dashboard uses on the wire (`"admin"`, `"canManageProjects"`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::error::DashboardError;

/// Identifier carried by every fixture record.
pub type EntityId = String;

/// Category of user; decides which feature areas are visible.
/// Assigned at login and never changed for the life of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Guest,
    Demo,
    Trial,
}

impl Role {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Human-facing label shown next to the user's name.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::User => "Project Manager",
            Role::Guest => "Guest",
            Role::Demo => "Demo User",
            Role::Trial => "Trial User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownRole(s.to_string()))
    }
}

/// Named permission flag gating one feature area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
pub enum Capability {
    #[serde(rename = "canManageUsers")]
    #[strum(serialize = "canManageUsers")]
    ManageUsers,
    #[serde(rename = "canManageProjects")]
    #[strum(serialize = "canManageProjects")]
    ManageProjects,
    #[serde(rename = "canViewReports")]
    #[strum(serialize = "canViewReports")]
    ViewReports,
    #[serde(rename = "canManageInventory")]
    #[strum(serialize = "canManageInventory")]
    ManageInventory,
    #[serde(rename = "canApproveForms")]
    #[strum(serialize = "canApproveForms")]
    ApproveForms,
    #[serde(rename = "canManageSafety")]
    #[strum(serialize = "canManageSafety")]
    ManageSafety,
    #[serde(rename = "canTrackTime")]
    #[strum(serialize = "canTrackTime")]
    TrackTime,
}

impl Capability {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::iter()
            .find(|cap| cap.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownCapability(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_identifiers_round_trip() {
        for role in Role::iter() {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert_eq!(Role::Trial.as_str(), "trial");
    }

    #[test]
    fn test_capability_identifiers_are_camel_case() {
        assert_eq!(Capability::ManageProjects.as_str(), "canManageProjects");
        assert_eq!(Capability::TrackTime.to_string(), "canTrackTime");
        assert_eq!("canApproveForms".parse::<Capability>().unwrap(), Capability::ApproveForms);
    }

    #[test]
    fn test_unknown_identifiers_are_rejected() {
        assert_eq!(
            "superuser".parse::<Role>(),
            Err(DashboardError::UnknownRole("superuser".into()))
        );
        assert_eq!(
            "canFly".parse::<Capability>(),
            Err(DashboardError::UnknownCapability("canFly".into()))
        );
    }

    #[test]
    fn test_serde_matches_string_identifiers() {
        assert_eq!(serde_json::to_string(&Role::Demo).unwrap(), "\"demo\"");
        let cap: Capability = serde_json::from_str("\"canViewReports\"").unwrap();
        assert_eq!(cap, Capability::ViewReports);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Role::User.display_name(), "Project Manager");
        assert_eq!(Role::Admin.display_name(), "Administrator");
    }
}
