//! Sidebar navigation entries and their visibility filter.

use serde::{Deserialize, Serialize};

use crate::access::policy::has_permission;
use crate::types::{Capability, Role};

/// One sidebar link. `capability == None` means always visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    pub capability: Option<Capability>,
}

impl NavItem {
    pub fn new(title: impl Into<String>, href: impl Into<String>, capability: Option<Capability>) -> Self {
        NavItem {
            title: title.into(),
            href: href.into(),
            capability,
        }
    }

    pub fn is_visible_to(&self, role: Role) -> bool {
        match self.capability {
            None => true,
            Some(cap) => has_permission(role, cap),
        }
    }
}

/// Stable filter: keeps input order, drops exactly the items `role` may not see.
pub fn filter_visible_nav_items(role: Role, items: &[NavItem]) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| item.is_visible_to(role))
        .cloned()
        .collect()
}

/// The dashboard's sidebar, top to bottom.
pub fn sidebar_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Dashboard", "/", None),
        NavItem::new("Projects", "/projects", Some(Capability::ManageProjects)),
        NavItem::new("Forms & Approvals", "/forms", Some(Capability::ApproveForms)),
        NavItem::new("Inventory", "/inventory", Some(Capability::ManageInventory)),
        NavItem::new("Safety & Observations", "/safety", Some(Capability::ManageSafety)),
        NavItem::new("Time Tracking", "/time-tracking", Some(Capability::TrackTime)),
        NavItem::new("User Management", "/users", Some(Capability::ManageUsers)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_admin_sees_full_sidebar() {
        let all = sidebar_items();
        assert_eq!(filter_visible_nav_items(Role::Admin, &all), all);
    }

    #[test]
    fn test_guest_sees_only_ungated_items() {
        let visible = filter_visible_nav_items(Role::Guest, &sidebar_items());
        assert_eq!(titles(&visible), vec!["Dashboard"]);
    }

    #[test]
    fn test_project_manager_sidebar() {
        let visible = filter_visible_nav_items(Role::User, &sidebar_items());
        assert_eq!(
            titles(&visible),
            vec!["Dashboard", "Projects", "Inventory", "Safety & Observations", "Time Tracking"]
        );
    }

    #[test]
    fn test_filter_keeps_caller_order() {
        let items = vec![
            NavItem::new("z", "/z", Some(Capability::TrackTime)),
            NavItem::new("a", "/a", None),
            NavItem::new("m", "/m", Some(Capability::ManageUsers)),
            NavItem::new("b", "/b", Some(Capability::ManageSafety)),
        ];
        assert_eq!(titles(&filter_visible_nav_items(Role::Trial, &items)), vec!["z", "a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_visible_nav_items(Role::Admin, &[]).is_empty());
    }
}
