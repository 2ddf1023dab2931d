//! Driving port for credential mutations.

use async_trait::async_trait;

use crate::domain::{Credential, CredentialFields, CredentialId, Error};

/// Create, update and delete stored credentials.
#[async_trait]
pub trait CredentialCommand: Send + Sync {
    /// Store a new credential with a fresh id and timestamp.
    async fn create(&self, fields: CredentialFields) -> Result<Credential, Error>;

    /// Apply a partial update. Fails with `not_found("Credential not found")`.
    async fn update(&self, id: &CredentialId, patch: CredentialFields)
    -> Result<Credential, Error>;

    /// Delete a credential. Fails with `not_found("Credential not found")`.
    async fn delete(&self, id: &CredentialId) -> Result<(), Error>;
}
