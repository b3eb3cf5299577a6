//! View states and the triggers that move between them.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Which presentation a feature page is showing.
///
/// `Detail` and `Edit` always carry the id in focus; `List` and `Create` never
/// do, so "detail without an id" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "selectedEntityId", rename_all = "lowercase")]
pub enum ViewState<Id> {
    List,
    Detail(Id),
    Create,
    Edit(Id),
}

impl<Id> Default for ViewState<Id> {
    fn default() -> Self {
        ViewState::List
    }
}

impl<Id> ViewState<Id> {
    pub fn mode(&self) -> ViewMode {
        match self {
            ViewState::List => ViewMode::List,
            ViewState::Detail(_) => ViewMode::Detail,
            ViewState::Create => ViewMode::Create,
            ViewState::Edit(_) => ViewMode::Edit,
        }
    }

    pub fn selected_id(&self) -> Option<&Id> {
        match self {
            ViewState::Detail(id) | ViewState::Edit(id) => Some(id),
            ViewState::List | ViewState::Create => None,
        }
    }

    /// True in `Create` and `Edit`, the two states that accept `saved`.
    pub fn is_form(&self) -> bool {
        matches!(self, ViewState::Create | ViewState::Edit(_))
    }
}

/// Id-less discriminant of `ViewState`, used in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewMode {
    List,
    Detail,
    Create,
    Edit,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// User-initiated events a navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Trigger {
    SelectEntity,
    CreateRequested,
    EditRequested,
    Back,
    Saved,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
