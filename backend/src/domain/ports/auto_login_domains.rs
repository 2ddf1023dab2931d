//! Driving port for first auto-login domain flags.

use async_trait::async_trait;

use crate::domain::{AutoLoginDomain, Error};

/// Flag domains and list the flagged set.
#[async_trait]
pub trait AutoLoginDomains: Send + Sync {
    /// Flag `domain`. Adding an already flagged domain succeeds unchanged.
    async fn add(&self, domain: AutoLoginDomain) -> Result<AutoLoginDomain, Error>;

    /// All flagged domains, order unspecified.
    async fn list(&self) -> Result<Vec<AutoLoginDomain>, Error>;
}
