#![forbid(unsafe_code)]
#![deny(clippy::all)]

//!
//! SitePro-Core is the headless core of a construction-site management
//! dashboard.
//!
//! It holds the role-based access table, the list / detail / create / edit
//! navigator every feature page runs on, an explicit login session, and the
//! static sample data the pages browse.

// Shared enums (Role, Capability) and id aliases.
pub mod types;

// Error types for sessions, navigation, actions and configuration.
pub mod error;

// Role permission table and sidebar filtering.
pub mod access;

// Per-page view state machine and the save collaborator trait.
pub mod navigator;

// Projects, inventory, forms, safety and user records.
pub mod domain;

// Static sample data and the fixture account directory.
pub mod fixtures;

// Id lookup and list filters over fixture collections.
pub mod query;

// Login / logout lifecycle.
pub mod session;

// Feature pages resolving navigator state against fixture lists.
pub mod pages;

// Approval decisions and comments.
pub mod actions;

// Runtime configuration loaded from JSON.
pub mod config;

#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use access::{filter_visible_nav_items, has_permission, sidebar_items, CapabilitySet, NavItem};
pub use actions::{ActionKind, ActionLog, ActionRecord};
pub use config::{AuthConfig, DashboardConfig, LoggingConfig};
pub use error::{DashboardError, NavigationError};
pub use fixtures::{Fixtures, UserDirectory};
pub use navigator::{SaveHandler, Trigger, ViewMode, ViewNavigator, ViewState};
pub use pages::{FeaturePage, Page, ResolvedView};
pub use query::{Filter, Record, Repository};
pub use session::Session;
pub use types::{Capability, EntityId, Role};
