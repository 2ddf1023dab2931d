//! Server-side session records.

use chrono::{DateTime, Utc};

use crate::domain::{UserId, UserSummary};

/// Binding between a token and the user who logged in with it.
///
/// `created_at` is fixed at login; `last_access` moves forward on every
/// authenticated lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: UserSummary,
    created_at: DateTime<Utc>,
    last_access: DateTime<Utc>,
}

impl Session {
    /// Open a session for `user` at `now`.
    pub fn open(user: UserSummary, now: DateTime<Utc>) -> Self {
        Self {
            user,
            created_at: now,
            last_access: now,
        }
    }

    /// Owner key used by the per-user token index. `None` for users
    /// without an id.
    pub fn user_id(&self) -> Option<&UserId> {
        self.user.id()
    }

    pub fn user(&self) -> &UserSummary {
        &self.user
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_access(&self) -> DateTime<Utc> {
        self.last_access
    }

    /// Record an access at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_access = now;
    }
}
