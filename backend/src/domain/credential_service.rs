//! Credential domain services.
//!
//! These services implement the credential driving ports. Ids and
//! timestamps are assigned here; the repository only stores records.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{
    CredentialCommand, CredentialQuery, CredentialRepository, CredentialRepositoryError,
};
use crate::domain::{Credential, CredentialFields, CredentialFilter, CredentialId, Error};

const NOT_FOUND: &str = "Credential not found";

fn map_repository_error(error: CredentialRepositoryError) -> Error {
    match error {
        CredentialRepositoryError::Unavailable { message } => {
            Error::internal(format!("credential store unavailable: {message}"))
        }
    }
}

/// Credential service implementing command and query driving ports.
#[derive(Clone)]
pub struct CredentialService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> CredentialService<R> {
    /// Create a service over the credential repository.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    fn now_millis(&self) -> i64 {
        self.clock.utc().timestamp_millis()
    }
}

#[async_trait]
impl<R> CredentialCommand for CredentialService<R>
where
    R: CredentialRepository,
{
    async fn create(&self, fields: CredentialFields) -> Result<Credential, Error> {
        let credential = Credential::new(CredentialId::random(), fields, self.now_millis());
        self.repo
            .insert(credential.clone())
            .await
            .map_err(map_repository_error)?;
        Ok(credential)
    }

    async fn update(
        &self,
        id: &CredentialId,
        patch: CredentialFields,
    ) -> Result<Credential, Error> {
        self.repo
            .update(id, patch, self.now_millis())
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(NOT_FOUND))
    }

    async fn delete(&self, id: &CredentialId) -> Result<(), Error> {
        let removed = self.repo.remove(id).await.map_err(map_repository_error)?;
        if removed {
            Ok(())
        } else {
            Err(Error::not_found(NOT_FOUND))
        }
    }
}

#[async_trait]
impl<R> CredentialQuery for CredentialService<R>
where
    R: CredentialRepository,
{
    async fn list(&self, filter: &CredentialFilter) -> Result<Vec<Credential>, Error> {
        self.repo.list(filter).await.map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockCredentialRepository;
    use chrono::{TimeZone, Utc};
    use mockable::MockClock;
    use rstest::rstest;

    const NOW_MS: i64 = 1_761_100_000_000;

    fn clock() -> Arc<dyn Clock> {
        let mut clock = MockClock::new();
        clock
            .expect_utc()
            .return_const(Utc.timestamp_millis_opt(NOW_MS).single().expect("valid"));
        Arc::new(clock)
    }

    fn id(raw: &str) -> CredentialId {
        CredentialId::new(raw).expect("valid id")
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamp() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_insert()
            .withf(|credential| credential.timestamp() == NOW_MS)
            .times(1)
            .return_once(|_| Ok(()));
        let service = CredentialService::new(Arc::new(repo), clock());

        let created = service
            .create(CredentialFields {
                domain: Some("example.com".into()),
                ..CredentialFields::default()
            })
            .await
            .expect("create succeeds");

        assert!(!created.id().as_ref().is_empty());
        assert_eq!(created.timestamp(), NOW_MS);
        assert_eq!(created.fields().domain.as_deref(), Some("example.com"));
    }

    #[tokio::test]
    async fn update_passes_current_time_to_store() {
        let updated = Credential::new(id("fdcd"), CredentialFields::default(), NOW_MS);
        let mut repo = MockCredentialRepository::new();
        repo.expect_update()
            .withf(|id, _, timestamp| id.as_ref() == "fdcd" && *timestamp == NOW_MS)
            .times(1)
            .return_once(move |_, _, _| Ok(Some(updated)));
        let service = CredentialService::new(Arc::new(repo), clock());

        let credential = service
            .update(&id("fdcd"), CredentialFields::default())
            .await
            .expect("update succeeds");

        assert_eq!(credential.timestamp(), NOW_MS);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_update().return_once(|_, _, _| Ok(None));
        let service = CredentialService::new(Arc::new(repo), clock());

        let error = service
            .update(&id("missing"), CredentialFields::default())
            .await
            .expect_err("not found");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "Credential not found");
    }

    #[rstest]
    #[case::present(true, None)]
    #[case::absent(false, Some(ErrorCode::NotFound))]
    #[tokio::test]
    async fn delete_reports_missing_ids(#[case] removed: bool, #[case] expected: Option<ErrorCode>) {
        let mut repo = MockCredentialRepository::new();
        repo.expect_remove().times(1).return_once(move |_| Ok(removed));
        let service = CredentialService::new(Arc::new(repo), clock());

        let outcome = service.delete(&id("fdcd")).await;

        assert_eq!(outcome.err().map(|error| error.code()), expected);
    }

    #[tokio::test]
    async fn store_failures_become_internal_errors() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_list()
            .return_once(|_| Err(CredentialRepositoryError::unavailable("poisoned")));
        let service = CredentialService::new(Arc::new(repo), clock());

        let error = service
            .list(&CredentialFilter::all())
            .await
            .expect_err("store failure");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
