//! First auto-login domain set.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::POISONED;
use crate::domain::AutoLoginDomain;
use crate::domain::ports::{AutoLoginDomainRepository, AutoLoginDomainRepositoryError};

/// Flagged domains without duplicates, listed in the order first added.
#[derive(Debug, Default)]
pub struct InMemoryAutoLoginDomainRepository {
    domains: Mutex<Vec<AutoLoginDomain>>,
}

impl InMemoryAutoLoginDomainRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, Vec<AutoLoginDomain>>, AutoLoginDomainRepositoryError> {
        self.domains
            .lock()
            .map_err(|_| AutoLoginDomainRepositoryError::unavailable(POISONED))
    }
}

#[async_trait]
impl AutoLoginDomainRepository for InMemoryAutoLoginDomainRepository {
    async fn insert(&self, domain: AutoLoginDomain) -> Result<bool, AutoLoginDomainRepositoryError> {
        let mut domains = self.lock()?;
        if domains.contains(&domain) {
            return Ok(false);
        }
        domains.push(domain);
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<AutoLoginDomain>, AutoLoginDomainRepositoryError> {
        Ok(self.lock()?.clone())
    }
}
