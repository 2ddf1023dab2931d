//! Ordered credential store.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::POISONED;
use crate::domain::ports::{CredentialRepository, CredentialRepositoryError};
use crate::domain::{Credential, CredentialFields, CredentialFilter, CredentialId};

/// Credentials in insertion order. Lookups by id are linear scans.
#[derive(Debug, Default)]
pub struct InMemoryCredentialRepository {
    records: Mutex<Vec<Credential>>,
}

impl InMemoryCredentialRepository {
    /// Start from `seed`, keeping its order.
    pub fn new(seed: Vec<Credential>) -> Self {
        Self {
            records: Mutex::new(seed),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Credential>>, CredentialRepositoryError> {
        self.records
            .lock()
            .map_err(|_| CredentialRepositoryError::unavailable(POISONED))
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn list(
        &self,
        filter: &CredentialFilter,
    ) -> Result<Vec<Credential>, CredentialRepositoryError> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .filter(|credential| filter.matches(credential))
            .cloned()
            .collect())
    }

    async fn insert(&self, credential: Credential) -> Result<(), CredentialRepositoryError> {
        self.lock()?.push(credential);
        Ok(())
    }

    async fn update(
        &self,
        id: &CredentialId,
        patch: CredentialFields,
        timestamp: i64,
    ) -> Result<Option<Credential>, CredentialRepositoryError> {
        let mut records = self.lock()?;
        Ok(records
            .iter_mut()
            .find(|credential| credential.id() == id)
            .map(|credential| {
                credential.apply(patch, timestamp);
                credential.clone()
            }))
    }

    async fn remove(&self, id: &CredentialId) -> Result<bool, CredentialRepositoryError> {
        let mut records = self.lock()?;
        let Some(index) = records.iter().position(|credential| credential.id() == id) else {
            return Ok(false);
        };
        records.remove(index);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn credential(id: &str, domain: Option<&str>) -> Credential {
        Credential::new(
            CredentialId::new(id).expect("valid id"),
            CredentialFields {
                domain: domain.map(str::to_owned),
                username: Some(format!("{id}@example.com")),
                ..CredentialFields::default()
            },
            1_000,
        )
    }

    #[fixture]
    fn store() -> InMemoryCredentialRepository {
        InMemoryCredentialRepository::new(vec![
            credential("a", Some("Example.com")),
            credential("b", None),
            credential("c", Some("coupang.com")),
            credential("d", Some("www.example.org")),
        ])
    }

    fn ids(credentials: &[Credential]) -> Vec<&str> {
        credentials.iter().map(|c| c.id().as_ref()).collect()
    }

    #[rstest]
    #[case::no_filter(None, vec!["a", "b", "c", "d"])]
    #[case::empty_filter(Some(""), vec!["a", "b", "c", "d"])]
    #[case::case_insensitive(Some("EXAMPLE"), vec!["a", "d"])]
    #[case::no_match(Some("naver"), vec![])]
    #[tokio::test]
    async fn list_filters_by_domain_in_order(
        store: InMemoryCredentialRepository,
        #[case] needle: Option<&str>,
        #[case] expected: Vec<&str>,
    ) {
        let listed = store
            .list(&CredentialFilter::by_domain(needle))
            .await
            .expect("list");

        assert_eq!(ids(&listed), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_appends(store: InMemoryCredentialRepository) {
        store
            .insert(credential("e", Some("naver.com")))
            .await
            .expect("insert");

        let listed = store.list(&CredentialFilter::all()).await.expect("list");
        assert_eq!(ids(&listed), vec!["a", "b", "c", "d", "e"]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_merges_supplied_fields_and_restamps(store: InMemoryCredentialRepository) {
        let id = CredentialId::new("c").expect("valid id");
        let patch = CredentialFields {
            password: Some("new-secret".into()),
            ..CredentialFields::default()
        };

        let updated = store
            .update(&id, patch, 2_000)
            .await
            .expect("update")
            .expect("known id");

        assert_eq!(updated.id(), &id);
        assert_eq!(updated.timestamp(), 2_000);
        assert_eq!(updated.fields().password.as_deref(), Some("new-secret"));
        assert_eq!(updated.fields().domain.as_deref(), Some("coupang.com"));
        assert_eq!(updated.fields().username.as_deref(), Some("c@example.com"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_unknown_id_changes_nothing(store: InMemoryCredentialRepository) {
        let id = CredentialId::new("zz").expect("valid id");

        let outcome = store
            .update(&id, CredentialFields::default(), 2_000)
            .await
            .expect("update");

        assert!(outcome.is_none());
        let listed = store.list(&CredentialFilter::all()).await.expect("list");
        assert!(listed.iter().all(|c| c.timestamp() == 1_000));
    }

    #[rstest]
    #[tokio::test]
    async fn remove_reports_presence(store: InMemoryCredentialRepository) {
        let id = CredentialId::new("b").expect("valid id");

        assert!(store.remove(&id).await.expect("remove"));
        assert!(!store.remove(&id).await.expect("remove"));
        let listed = store.list(&CredentialFilter::all()).await.expect("list");
        assert_eq!(ids(&listed), vec!["a", "c", "d"]);
    }

    #[tokio::test]
    async fn remove_takes_only_the_first_duplicate() {
        let store = InMemoryCredentialRepository::new(vec![
            credential("dup", Some("first.com")),
            credential("x", None),
            credential("dup", Some("second.com")),
        ]);
        let id = CredentialId::new("dup").expect("valid id");

        assert!(store.remove(&id).await.expect("remove"));

        let listed = store.list(&CredentialFilter::all()).await.expect("list");
        assert_eq!(ids(&listed), vec!["x", "dup"]);
        assert_eq!(listed[1].fields().domain.as_deref(), Some("second.com"));
    }
}
