//! Driven port for the preloaded user directory.

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading users.
    pub enum UserRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } => "user store unavailable: {message}",
    }
}

/// Read-only lookup over the user directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return the first user whose email equals `email` exactly.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;
}
