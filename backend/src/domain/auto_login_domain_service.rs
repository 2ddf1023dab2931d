//! First auto-login domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    AutoLoginDomainRepository, AutoLoginDomainRepositoryError, AutoLoginDomains,
};
use crate::domain::{AutoLoginDomain, Error};

fn map_repository_error(error: AutoLoginDomainRepositoryError) -> Error {
    match error {
        AutoLoginDomainRepositoryError::Unavailable { message } => {
            Error::internal(format!("domain flag store unavailable: {message}"))
        }
    }
}

/// Service implementing the [`AutoLoginDomains`] driving port.
#[derive(Clone)]
pub struct AutoLoginDomainService<R> {
    repo: Arc<R>,
}

impl<R> AutoLoginDomainService<R> {
    /// Create a service over the domain flag repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> AutoLoginDomains for AutoLoginDomainService<R>
where
    R: AutoLoginDomainRepository,
{
    async fn add(&self, domain: AutoLoginDomain) -> Result<AutoLoginDomain, Error> {
        let inserted = self
            .repo
            .insert(domain.clone())
            .await
            .map_err(map_repository_error)?;
        debug!(%domain, inserted, "first auto-login domain flagged");
        Ok(domain)
    }

    async fn list(&self) -> Result<Vec<AutoLoginDomain>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockAutoLoginDomainRepository;
    use rstest::rstest;

    #[rstest]
    #[case::new_domain(true)]
    #[case::duplicate(false)]
    #[tokio::test]
    async fn add_echoes_domain_either_way(#[case] inserted: bool) {
        let mut repo = MockAutoLoginDomainRepository::new();
        repo.expect_insert()
            .withf(|domain| domain.as_ref() == "coupang.com")
            .times(1)
            .return_once(move |_| Ok(inserted));
        let service = AutoLoginDomainService::new(Arc::new(repo));

        let domain = service
            .add(AutoLoginDomain::new("coupang.com").expect("valid"))
            .await
            .expect("add succeeds");

        assert_eq!(domain.as_ref(), "coupang.com");
    }

    #[tokio::test]
    async fn list_maps_store_failure() {
        let mut repo = MockAutoLoginDomainRepository::new();
        repo.expect_list()
            .return_once(|| Err(AutoLoginDomainRepositoryError::unavailable("poisoned")));
        let service = AutoLoginDomainService::new(Arc::new(repo));

        let error = service.list().await.expect_err("store failure");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
