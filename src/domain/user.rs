//! Dashboard user accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub company: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub trial_expires_at: Option<DateTime<Utc>>,
}

impl User {
    /// True only for accounts carrying an expiry that is at or before `now`.
    pub fn trial_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.trial_expires_at.is_some_and(|expires| expires <= now)
    }
}
