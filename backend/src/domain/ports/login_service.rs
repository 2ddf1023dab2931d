//! Driving port for login and session use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate users and resolve bearer tokens without knowing how
//! sessions are stored. Handler tests substitute a double or an in-memory
//! wiring instead of a real backend.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SessionToken, UserSummary};

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub token: SessionToken,
    pub user: UserSummary,
}

/// Domain use-case port for authentication and session lifecycle.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check credentials and open a new session.
    ///
    /// Fails with `unauthorized("Invalid credentials")` when the email is
    /// unknown or the password differs.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthenticatedSession, Error>;

    /// Close the session behind `token`. Unknown tokens are ignored.
    async fn logout(&self, token: &SessionToken) -> Result<(), Error>;

    /// Resolve `token` to its user, recording the access.
    ///
    /// Fails with `unauthorized("Invalid token")` for unknown tokens.
    async fn current_user(&self, token: &SessionToken) -> Result<UserSummary, Error>;

    /// Swap `token` for a new one bound to the same user. The old token
    /// stops working.
    async fn refresh(&self, token: &SessionToken) -> Result<SessionToken, Error>;
}
