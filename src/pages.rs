//!
//! Feature pages: each one pairs a `ViewNavigator` with the collection it
//! browses, and turns the navigator's selection into something renderable.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

use crate::access::has_permission;
use crate::domain::{FormDraft, FormSubmission, Material, Project, ProjectDraft, SafetyIncident};
use crate::navigator::{LoggingSaveHandler, SaveHandler, ViewMode, ViewNavigator, ViewState};
use crate::query::{Record, Repository};
use crate::types::{Capability, EntityId, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeaturePage {
    Projects,
    Forms,
    Inventory,
    Safety,
}

impl FeaturePage {
    pub fn route(self) -> &'static str {
        match self {
            FeaturePage::Projects => "/projects",
            FeaturePage::Forms => "/forms",
            FeaturePage::Inventory => "/inventory",
            FeaturePage::Safety => "/safety",
        }
    }

    /// Capability gating the page's sidebar link.
    pub fn capability(self) -> Capability {
        match self {
            FeaturePage::Projects => Capability::ManageProjects,
            FeaturePage::Forms => Capability::ApproveForms,
            FeaturePage::Inventory => Capability::ManageInventory,
            FeaturePage::Safety => Capability::ManageSafety,
        }
    }

    pub fn is_accessible_to(self, role: Role) -> bool {
        has_permission(role, self.capability())
    }
}

impl fmt::Display for FeaturePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// What a page shows for its current navigator state.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedView<'a, T> {
    List,
    Detail(&'a T),
    Create,
    Edit(&'a T),
    /// The selected id is not in the collection.
    NotFound(EntityId),
}

impl<'a, T> ResolvedView<'a, T> {
    pub fn mode(&self) -> Option<ViewMode> {
        match self {
            ResolvedView::List => Some(ViewMode::List),
            ResolvedView::Detail(_) => Some(ViewMode::Detail),
            ResolvedView::Create => Some(ViewMode::Create),
            ResolvedView::Edit(_) => Some(ViewMode::Edit),
            ResolvedView::NotFound(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Page<T, H> {
    kind: FeaturePage,
    navigator: ViewNavigator<EntityId, H>,
    _record: PhantomData<fn() -> T>,
}

impl<T, H> Page<T, H>
where
    T: Record,
    H: SaveHandler,
{
    pub fn new(kind: FeaturePage, save_handler: H) -> Self {
        Page {
            kind,
            navigator: ViewNavigator::new(save_handler),
            _record: PhantomData,
        }
    }

    pub fn kind(&self) -> FeaturePage {
        self.kind
    }

    pub fn navigator(&self) -> &ViewNavigator<EntityId, H> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut ViewNavigator<EntityId, H> {
        &mut self.navigator
    }

    /// Looks the selected id up in `repo`. A miss yields `NotFound` and leaves
    /// the navigator where it is.
    pub fn resolve<'a>(&self, repo: &Repository<'a, T>) -> ResolvedView<'a, T> {
        let lookup = |id: &EntityId| {
            let found = repo.find_by_id(id);
            if found.is_none() {
                tracing::debug!(page = %self.kind, id = %id, "selected record not found");
            }
            found
        };
        match self.navigator.state() {
            ViewState::List => ResolvedView::List,
            ViewState::Create => ResolvedView::Create,
            ViewState::Detail(id) => lookup(id).map_or_else(|| ResolvedView::NotFound(id.clone()), ResolvedView::Detail),
            ViewState::Edit(id) => lookup(id).map_or_else(|| ResolvedView::NotFound(id.clone()), ResolvedView::Edit),
        }
    }
}

pub type ProjectsPage = Page<Project, LoggingSaveHandler<ProjectDraft>>;
pub type FormsPage = Page<FormSubmission, LoggingSaveHandler<FormDraft>>;
pub type InventoryPage = Page<Material, LoggingSaveHandler<Material>>;
pub type SafetyPage = Page<SafetyIncident, LoggingSaveHandler<SafetyIncident>>;

impl ProjectsPage {
    pub fn projects() -> Self {
        Page::new(FeaturePage::Projects, LoggingSaveHandler::new("project"))
    }
}

impl FormsPage {
    pub fn forms() -> Self {
        Page::new(FeaturePage::Forms, LoggingSaveHandler::new("form"))
    }
}

impl InventoryPage {
    pub fn inventory() -> Self {
        Page::new(FeaturePage::Inventory, LoggingSaveHandler::new("material"))
    }
}

impl SafetyPage {
    pub fn safety() -> Self {
        Page::new(FeaturePage::Safety, LoggingSaveHandler::new("incident"))
    }
}
