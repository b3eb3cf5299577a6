//! Access-control modules: the role permission table and sidebar filtering.

pub mod nav;
pub mod policy;

pub use nav::{filter_visible_nav_items, sidebar_items, NavItem};
pub use policy::{has_permission, CapabilitySet};
