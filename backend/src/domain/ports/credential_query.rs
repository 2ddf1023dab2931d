//! Driving port for credential reads.

use async_trait::async_trait;

use crate::domain::{Credential, CredentialFilter, Error};

/// List stored credentials.
#[async_trait]
pub trait CredentialQuery: Send + Sync {
    /// Credentials matching `filter`, oldest first.
    async fn list(&self, filter: &CredentialFilter) -> Result<Vec<Credential>, Error>;
}
