//! Driven port for the first auto-login domain set.

use async_trait::async_trait;

use crate::domain::AutoLoginDomain;

use super::define_port_error;

define_port_error! {
    /// Errors raised by domain flag storage.
    pub enum AutoLoginDomainRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } => "domain flag store unavailable: {message}",
    }
}

/// Set of flagged domains.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AutoLoginDomainRepository: Send + Sync {
    /// Add `domain`; returns `false` if it was already present.
    async fn insert(&self, domain: AutoLoginDomain) -> Result<bool, AutoLoginDomainRepositoryError>;

    /// Every flagged domain. Order is not part of the contract.
    async fn list(&self) -> Result<Vec<AutoLoginDomain>, AutoLoginDomainRepositoryError>;
}
