//!
//! The list / detail / create / edit state machine shared by every feature page.
//!
//! | From                  | Trigger              | To        |
//! |-----------------------|----------------------|-----------|
//! | List                  | `select_entity(id)`  | Detail(id)|
//! | List                  | `create_requested()` | Create    |
//! | any                   | `edit_requested(id)` | Edit(id)  |
//! | any                   | `back()`             | List      |
//! | Create / Edit         | `saved(payload)`     | List      |
//!
//! Any other (state, trigger) pair is rejected and leaves the state untouched.
//! Ids are never checked for existence here; resolving them is the page's job.

use std::fmt::Debug;

use crate::error::{DashboardError, NavigationError};
use crate::navigator::save::{LoggingSaveHandler, SaveHandler};
use crate::navigator::state::{Trigger, ViewMode, ViewState};

/// Per-page navigator, generic over the entity id and the save collaborator.
#[derive(Debug, Clone)]
pub struct ViewNavigator<Id, H> {
    state: ViewState<Id>,
    save_handler: H,
}

impl<Id, H> ViewNavigator<Id, H>
where
    Id: Clone + Debug,
    H: SaveHandler,
{
    /// Starts in `List` with no selection.
    pub fn new(save_handler: H) -> Self {
        ViewNavigator {
            state: ViewState::List,
            save_handler,
        }
    }

    pub fn state(&self) -> &ViewState<Id> {
        &self.state
    }

    pub fn mode(&self) -> ViewMode {
        self.state.mode()
    }

    pub fn selected_id(&self) -> Option<&Id> {
        self.state.selected_id()
    }

    pub fn save_handler(&self) -> &H {
        &self.save_handler
    }

    pub fn save_handler_mut(&mut self) -> &mut H {
        &mut self.save_handler
    }

    fn reject(&self, trigger: Trigger) -> NavigationError {
        let from = self.state.mode();
        tracing::warn!(%from, %trigger, "rejected view transition");
        NavigationError::InvalidTransition { from, trigger }
    }

    fn transition(&mut self, next: ViewState<Id>, trigger: Trigger) {
        tracing::debug!(from = %self.state.mode(), to = %next.mode(), %trigger, id = ?next.selected_id(), "view transition");
        self.state = next;
    }

    /// List → Detail(id).
    pub fn select_entity(&mut self, id: Id) -> Result<(), NavigationError> {
        match self.state {
            ViewState::List => {
                self.transition(ViewState::Detail(id), Trigger::SelectEntity);
                Ok(())
            }
            _ => Err(self.reject(Trigger::SelectEntity)),
        }
    }

    /// List → Create.
    pub fn create_requested(&mut self) -> Result<(), NavigationError> {
        match self.state {
            ViewState::List => {
                self.transition(ViewState::Create, Trigger::CreateRequested);
                Ok(())
            }
            _ => Err(self.reject(Trigger::CreateRequested)),
        }
    }

    /// Any state → Edit(id).
    pub fn edit_requested(&mut self, id: Id) {
        self.transition(ViewState::Edit(id), Trigger::EditRequested);
    }

    /// Any state → List, dropping the selection. A no-op when already in List.
    pub fn back(&mut self) {
        if matches!(self.state, ViewState::List) {
            return;
        }
        self.transition(ViewState::List, Trigger::Back);
    }

    /// Create / Edit → List, handing `payload` to the save collaborator first.
    ///
    /// The handler runs exactly once. If it fails the navigator stays in the
    /// form so the caller can retry.
    pub fn saved(&mut self, payload: H::Payload) -> Result<(), DashboardError> {
        if !self.state.is_form() {
            return Err(self.reject(Trigger::Saved).into());
        }
        self.save_handler.save(payload)?;
        self.transition(ViewState::List, Trigger::Saved);
        Ok(())
    }

    /// Applies `trigger` by name. Used by event dispatchers that only carry an
    /// optional id; `Saved` is not accepted here because it needs a payload.
    pub fn dispatch(&mut self, trigger: Trigger, id: Option<Id>) -> Result<(), NavigationError> {
        match (trigger, id) {
            (Trigger::SelectEntity, Some(id)) => self.select_entity(id),
            (Trigger::CreateRequested, _) => self.create_requested(),
            (Trigger::EditRequested, Some(id)) => {
                self.edit_requested(id);
                Ok(())
            }
            (Trigger::Back, _) => {
                self.back();
                Ok(())
            }
            (trigger @ (Trigger::SelectEntity | Trigger::EditRequested), None) => {
                tracing::warn!(%trigger, "dispatched without an id");
                Err(NavigationError::MissingId { trigger })
            }
            (trigger, _) => Err(self.reject(trigger)),
        }
    }
}

impl<Id, P> ViewNavigator<Id, LoggingSaveHandler<P>>
where
    Id: Clone + Debug,
    P: Debug,
{
    /// Navigator whose saves are only logged, tagged with `entity`.
    pub fn with_logging(entity: &'static str) -> Self {
        Self::new(LoggingSaveHandler::new(entity))
    }
}
