//! Login and session lifecycle service.
//!
//! Implements the [`LoginService`] driving port over a user directory and a
//! session store. Tokens are minted here so the store only ever sees
//! complete sessions.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    AuthenticatedSession, LoginService, SessionRepository, SessionRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{Error, LoginCredentials, Session, SessionToken, UserId, UserSummary};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const INVALID_TOKEN: &str = "Invalid token";

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Unavailable { message } => {
            Error::internal(format!("user directory unavailable: {message}"))
        }
    }
}

fn map_session_error(error: SessionRepositoryError) -> Error {
    match error {
        SessionRepositoryError::Unavailable { message } => {
            Error::internal(format!("session store unavailable: {message}"))
        }
    }
}

/// Session-backed authentication.
#[derive(Clone)]
pub struct SessionAuthService<U, S> {
    users: Arc<U>,
    sessions: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<U, S> SessionAuthService<U, S> {
    /// Create a service over the given user directory and session store.
    pub fn new(users: Arc<U>, sessions: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            sessions,
            clock,
        }
    }
}

impl<U, S> SessionAuthService<U, S>
where
    S: SessionRepository,
{
    async fn open_session(&self, user: UserSummary) -> Result<SessionToken, Error> {
        let now = self.clock.utc();
        let token = SessionToken::generate(now);
        self.sessions
            .insert(token.clone(), Session::open(user.clone(), now))
            .await
            .map_err(map_session_error)?;
        debug!(token = %token.redacted(), email = user.email(), "session opened");
        Ok(token)
    }

    /// Tokens currently held by `owner`. Not exposed over HTTP.
    pub async fn tokens_for(&self, owner: Option<UserId>) -> Result<Vec<SessionToken>, Error> {
        self.sessions
            .tokens_for(owner)
            .await
            .map_err(map_session_error)
    }
}

#[async_trait]
impl<U, S> LoginService for SessionAuthService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthenticatedSession, Error> {
        let user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_error)?
            .filter(|user| user.password_matches(credentials.password()));

        let Some(user) = user else {
            info!(email = credentials.email(), "login rejected");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let summary = user.summary();
        let token = self.open_session(summary.clone()).await?;
        Ok(AuthenticatedSession {
            token,
            user: summary,
        })
    }

    async fn logout(&self, token: &SessionToken) -> Result<(), Error> {
        let removed = self
            .sessions
            .remove(token)
            .await
            .map_err(map_session_error)?;
        if removed.is_some() {
            debug!(token = %token.redacted(), "session closed");
        }
        Ok(())
    }

    async fn current_user(&self, token: &SessionToken) -> Result<UserSummary, Error> {
        self.sessions
            .touch(token, self.clock.utc())
            .await
            .map_err(map_session_error)?
            .map(|session| session.user().clone())
            .ok_or_else(|| Error::unauthorized(INVALID_TOKEN))
    }

    async fn refresh(&self, token: &SessionToken) -> Result<SessionToken, Error> {
        let touched = self
            .sessions
            .touch(token, self.clock.utc())
            .await
            .map_err(map_session_error)?;
        if touched.is_none() {
            return Err(Error::unauthorized(INVALID_TOKEN));
        }

        // A concurrent refresh or logout may have won between the two steps.
        let Some(previous) = self
            .sessions
            .remove(token)
            .await
            .map_err(map_session_error)?
        else {
            return Err(Error::unauthorized(INVALID_TOKEN));
        };
        debug!(token = %token.redacted(), "session retired by refresh");

        self.open_session(previous.user().clone()).await
    }
}

#[cfg(test)]
#[path = "session_auth_service_tests.rs"]
mod tests;
