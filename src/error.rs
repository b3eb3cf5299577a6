//!
//! Defines error types for the dashboard core.

use crate::navigator::{Trigger, ViewMode};

/// A navigator was asked to perform a transition its current state does not offer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The trigger is not defined for the current mode. State is left unchanged.
    #[error("{trigger} is not allowed from the {from} view")]
    InvalidTransition { from: ViewMode, trigger: Trigger },
    /// The trigger targets an entity but was dispatched without an id.
    #[error("{trigger} needs an entity id")]
    MissingId { trigger: Trigger },
}

/// Errors surfaced by session, configuration, navigation and action handling.
/// All of them are recoverable by the caller; none leave state half-updated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// Email not in the directory or password mismatch.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// Trial account past its expiry date (only when expiry enforcement is on).
    #[error("Trial period has expired")]
    TrialExpired,
    /// The current role lacks the capability the action needs.
    #[error("Permission denied: {0} required")]
    PermissionDenied(crate::types::Capability),
    /// No session is active.
    #[error("Not signed in")]
    NotAuthenticated,
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Unknown capability: {0}")]
    UnknownCapability(String),
    /// Required form fields were left empty, listed by field name.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    /// Approval attempted on a submission that is not submitted or under review.
    #[error("Form {0} is not awaiting review")]
    NotAwaitingReview(String),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    /// The save collaborator refused the payload.
    #[error("Save failed: {0}")]
    Save(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
