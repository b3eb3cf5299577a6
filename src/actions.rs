//!
//! Approval decisions and comments on form submissions.
//!
//! Nothing is persisted; each accepted action becomes an `ActionRecord` in the
//! in-memory `ActionLog` and an info-level `tracing` event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use uuid::Uuid;

use crate::domain::{ApprovalAction, FormSubmission};
use crate::error::DashboardError;
use crate::session::Session;
use crate::types::{Capability, EntityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ActionKind {
    Approve,
    Reject,
    RequestChanges,
    Comment,
    Save,
}

impl From<ApprovalAction> for ActionKind {
    fn from(action: ApprovalAction) -> Self {
        match action {
            ApprovalAction::Approve => ActionKind::Approve,
            ApprovalAction::Reject => ActionKind::Reject,
            ApprovalAction::RequestChanges => ActionKind::RequestChanges,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    pub id: Uuid,
    pub at: DateTime<Utc>,
    /// Name of the acting user.
    pub actor: String,
    pub kind: ActionKind,
    pub target: EntityId,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    records: Vec<ActionRecord>,
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn for_target<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a ActionRecord> + 'a {
        self.records.iter().filter(move |r| r.target == target)
    }

    fn push(&mut self, actor: &str, kind: ActionKind, target: &str, comment: Option<String>, at: DateTime<Utc>) -> &ActionRecord {
        let record = ActionRecord {
            id: Uuid::new_v4(),
            at,
            actor: actor.to_string(),
            kind,
            target: target.to_string(),
            comment,
        };
        tracing::info!(
            action = record.kind.as_ref(),
            actor = %record.actor,
            target = %record.target,
            comment = ?record.comment,
            "recorded action"
        );
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Approve, reject or request changes on `submission`.
    ///
    /// Needs `canApproveForms`, and the submission must be awaiting review. A
    /// blank comment is stored as `None`.
    pub fn decide(
        &mut self,
        session: &Session,
        submission: &FormSubmission,
        action: ApprovalAction,
        comment: Option<&str>,
        at: DateTime<Utc>,
    ) -> Result<&ActionRecord, DashboardError> {
        let user = session.require(Capability::ApproveForms)?;
        if !submission.awaits_review() {
            return Err(DashboardError::NotAwaitingReview(submission.id.clone()));
        }
        Ok(self.push(&user.name, action.into(), &submission.id, non_blank(comment), at))
    }

    /// Adds a comment to `submission`. Blank content is ignored and yields `Ok(None)`.
    pub fn comment(
        &mut self,
        session: &Session,
        submission: &FormSubmission,
        content: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<&ActionRecord>, DashboardError> {
        let user = session.current_user().ok_or(DashboardError::NotAuthenticated)?;
        let Some(content) = non_blank(Some(content)) else {
            return Ok(None);
        };
        Ok(Some(self.push(&user.name, ActionKind::Comment, &submission.id, Some(content), at)))
    }

    /// Notes a successful save made by `actor` against `target`.
    pub fn record_save(&mut self, actor: &str, target: &str, at: DateTime<Utc>) -> &ActionRecord {
        self.push(actor, ActionKind::Save, target, None, at)
    }
}
