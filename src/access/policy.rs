//!
//! Role permission table.
//!
//! Each role has its own independently enumerated row of seven flags. Rows are
//! policy, not a hierarchy: `Trial` cannot view reports while `Demo` can, and no
//! row is derived from another.

use serde::{Deserialize, Serialize};

use crate::types::{Capability, Role};

/// Fixed-shape record of every capability flag for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySet {
    pub can_manage_users: bool,
    pub can_manage_projects: bool,
    pub can_view_reports: bool,
    pub can_manage_inventory: bool,
    pub can_approve_forms: bool,
    pub can_manage_safety: bool,
    pub can_track_time: bool,
}

pub const ADMIN: CapabilitySet = CapabilitySet {
    can_manage_users: true,
    can_manage_projects: true,
    can_view_reports: true,
    can_manage_inventory: true,
    can_approve_forms: true,
    can_manage_safety: true,
    can_track_time: true,
};

pub const USER: CapabilitySet = CapabilitySet {
    can_manage_users: false,
    can_manage_projects: true,
    can_view_reports: true,
    can_manage_inventory: true,
    can_approve_forms: false,
    can_manage_safety: true,
    can_track_time: true,
};

pub const GUEST: CapabilitySet = CapabilitySet {
    can_manage_users: false,
    can_manage_projects: false,
    can_view_reports: false,
    can_manage_inventory: false,
    can_approve_forms: false,
    can_manage_safety: false,
    can_track_time: false,
};

pub const DEMO: CapabilitySet = CapabilitySet {
    can_manage_users: false,
    can_manage_projects: true,
    can_view_reports: true,
    can_manage_inventory: true,
    can_approve_forms: false,
    can_manage_safety: true,
    can_track_time: true,
};

pub const TRIAL: CapabilitySet = CapabilitySet {
    can_manage_users: false,
    can_manage_projects: true,
    can_view_reports: false,
    can_manage_inventory: true,
    can_approve_forms: false,
    can_manage_safety: true,
    can_track_time: true,
};

impl CapabilitySet {
    /// The table row for `role`.
    #[inline]
    pub const fn for_role(role: Role) -> &'static CapabilitySet {
        match role {
            Role::Admin => &ADMIN,
            Role::User => &USER,
            Role::Guest => &GUEST,
            Role::Demo => &DEMO,
            Role::Trial => &TRIAL,
        }
    }

    /// Reads a single flag.
    #[inline]
    pub const fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::ManageUsers => self.can_manage_users,
            Capability::ManageProjects => self.can_manage_projects,
            Capability::ViewReports => self.can_view_reports,
            Capability::ManageInventory => self.can_manage_inventory,
            Capability::ApproveForms => self.can_approve_forms,
            Capability::ManageSafety => self.can_manage_safety,
            Capability::TrackTime => self.can_track_time,
        }
    }

    /// Granted capabilities in declaration order.
    pub fn granted(&self) -> Vec<Capability> {
        use strum::IntoEnumIterator;
        Capability::iter().filter(|cap| self.allows(*cap)).collect()
    }
}

/// Checks whether `role` holds `capability` according to the static table.
///
/// Total over the typed inputs; unknown role or capability strings are
/// rejected earlier, when parsing into `Role` / `Capability`.
#[inline]
pub fn has_permission(role: Role, capability: Capability) -> bool {
    CapabilitySet::for_role(role).allows(capability)
}
