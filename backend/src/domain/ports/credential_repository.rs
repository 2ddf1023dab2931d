//! Driven port for credential storage.

use async_trait::async_trait;

use crate::domain::{Credential, CredentialFields, CredentialFilter, CredentialId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by credential storage.
    pub enum CredentialRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } => "credential store unavailable: {message}",
    }
}

/// Ordered credential storage. Insertion order is the listing order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Credentials matching `filter`, in insertion order.
    async fn list(&self, filter: &CredentialFilter)
    -> Result<Vec<Credential>, CredentialRepositoryError>;

    /// Append a credential.
    async fn insert(&self, credential: Credential) -> Result<(), CredentialRepositoryError>;

    /// Merge `patch` into the credential with `id` and restamp it. Returns
    /// the updated record, or `None` when no credential has that id.
    async fn update(
        &self,
        id: &CredentialId,
        patch: CredentialFields,
        timestamp: i64,
    ) -> Result<Option<Credential>, CredentialRepositoryError>;

    /// Remove the credential with `id`. Returns `false` when absent.
    async fn remove(&self, id: &CredentialId) -> Result<bool, CredentialRepositoryError>;
}
