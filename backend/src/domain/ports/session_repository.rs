//! Driven port for session storage.
//!
//! Implementations keep two views in step: token → session, and owner →
//! tokens. Every method is a single atomic step against both views.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Session, SessionToken, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by session storage.
    pub enum SessionRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } => "session store unavailable: {message}",
    }
}

/// Storage for live sessions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store `session` under `token` and index the token under its owner.
    async fn insert(&self, token: SessionToken, session: Session)
    -> Result<(), SessionRepositoryError>;

    /// Look up a session, set its `last_access` to `now`, and return the
    /// updated record.
    async fn touch(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
    ) -> Result<Option<Session>, SessionRepositoryError>;

    /// Delete a session and unindex its token; the owner's index entry goes
    /// away with its last token. Returns the removed session, if any.
    async fn remove(&self, token: &SessionToken) -> Result<Option<Session>, SessionRepositoryError>;

    /// Tokens currently held by `owner` (`None` for users without an id).
    async fn tokens_for(
        &self,
        owner: Option<UserId>,
    ) -> Result<Vec<SessionToken>, SessionRepositoryError>;
}
