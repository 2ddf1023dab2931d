//! Preloaded user directory.

use async_trait::async_trait;

use crate::domain::User;
use crate::domain::ports::{UserRepository, UserRepositoryError};

/// Fixed list of users loaded at startup. Never mutated, so no lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.iter().find(|user| user.email() == email).cloned())
    }
}
