//! Session store with a per-user token index.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::POISONED;
use crate::domain::ports::{SessionRepository, SessionRepositoryError};
use crate::domain::{Session, SessionToken, UserId};

#[derive(Debug, Default)]
struct SessionTables {
    by_token: HashMap<SessionToken, Session>,
    by_owner: HashMap<Option<UserId>, HashSet<SessionToken>>,
}

/// Token → session map plus the owner → tokens index, kept in step.
///
/// A token appears in `by_owner[owner]` exactly when `by_token[token]`
/// belongs to that owner; empty owner sets are dropped.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    tables: Mutex<SessionTables>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionTables>, SessionRepositoryError> {
        self.tables
            .lock()
            .map_err(|_| SessionRepositoryError::unavailable(POISONED))
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(
        &self,
        token: SessionToken,
        session: Session,
    ) -> Result<(), SessionRepositoryError> {
        let mut tables = self.lock()?;
        let owner = session.user_id().cloned();
        if let Some(previous) = tables.by_token.insert(token.clone(), session) {
            // Token collision: unindex the displaced session's owner first.
            let previous_owner = previous.user_id().cloned();
            unindex(&mut tables.by_owner, &previous_owner, &token);
        }
        tables.by_owner.entry(owner).or_default().insert(token);
        Ok(())
    }

    async fn touch(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
    ) -> Result<Option<Session>, SessionRepositoryError> {
        let mut tables = self.lock()?;
        Ok(tables.by_token.get_mut(token).map(|session| {
            session.touch(now);
            session.clone()
        }))
    }

    async fn remove(
        &self,
        token: &SessionToken,
    ) -> Result<Option<Session>, SessionRepositoryError> {
        let mut tables = self.lock()?;
        let removed = tables.by_token.remove(token);
        if let Some(session) = &removed {
            let owner = session.user_id().cloned();
            unindex(&mut tables.by_owner, &owner, token);
        }
        Ok(removed)
    }

    async fn tokens_for(
        &self,
        owner: Option<UserId>,
    ) -> Result<Vec<SessionToken>, SessionRepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .by_owner
            .get(&owner)
            .map(|tokens| tokens.iter().cloned().collect())
            .unwrap_or_default())
    }
}

fn unindex(
    by_owner: &mut HashMap<Option<UserId>, HashSet<SessionToken>>,
    owner: &Option<UserId>,
    token: &SessionToken,
) {
    if let Some(tokens) = by_owner.get_mut(owner) {
        tokens.remove(token);
        if tokens.is_empty() {
            by_owner.remove(owner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_761_012_499_864)
            .single()
            .expect("valid timestamp")
    }

    fn owner() -> Option<UserId> {
        Some(UserId::new("2f02").expect("valid id"))
    }

    fn session_for(id: Option<UserId>, now: DateTime<Utc>) -> Session {
        let user = User::new(id, "thong1", "111").expect("valid user");
        Session::open(user.summary(), now)
    }

    fn token(raw: &str) -> SessionToken {
        SessionToken::parse(raw).expect("token")
    }

    #[rstest]
    #[tokio::test]
    async fn insert_indexes_token_under_owner(now: DateTime<Utc>) {
        let store = InMemorySessionRepository::new();
        store
            .insert(token("a"), session_for(owner(), now))
            .await
            .expect("insert");
        store
            .insert(token("b"), session_for(owner(), now))
            .await
            .expect("insert");

        let mut tokens = store.tokens_for(owner()).await.expect("lookup");
        tokens.sort_by(|left, right| left.as_ref().cmp(right.as_ref()));

        assert_eq!(tokens, vec![token("a"), token("b")]);
    }

    #[rstest]
    #[tokio::test]
    async fn remove_keeps_sibling_tokens_and_drops_empty_sets(now: DateTime<Utc>) {
        let store = InMemorySessionRepository::new();
        for raw in ["a", "b"] {
            store
                .insert(token(raw), session_for(owner(), now))
                .await
                .expect("insert");
        }

        assert!(store.remove(&token("a")).await.expect("remove").is_some());
        assert_eq!(
            store.tokens_for(owner()).await.expect("lookup"),
            vec![token("b")]
        );

        assert!(store.remove(&token("b")).await.expect("remove").is_some());
        assert!(store.remove(&token("b")).await.expect("remove").is_none());
        let tables = store.lock().expect("lock");
        assert!(tables.by_owner.is_empty());
        assert!(tables.by_token.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn sessions_without_user_id_share_the_none_bucket(now: DateTime<Utc>) {
        let store = InMemorySessionRepository::new();
        store
            .insert(token("anon"), session_for(None, now))
            .await
            .expect("insert");

        assert_eq!(
            store.tokens_for(None).await.expect("lookup"),
            vec![token("anon")]
        );
        assert!(store.tokens_for(owner()).await.expect("lookup").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn touch_updates_last_access_only(now: DateTime<Utc>) {
        let store = InMemorySessionRepository::new();
        store
            .insert(token("a"), session_for(owner(), now))
            .await
            .expect("insert");
        let later = now + chrono::TimeDelta::seconds(30);

        let touched = store
            .touch(&token("a"), later)
            .await
            .expect("touch")
            .expect("known token");

        assert_eq!(touched.created_at(), now);
        assert_eq!(touched.last_access(), later);
        assert!(
            store
                .touch(&token("missing"), later)
                .await
                .expect("touch")
                .is_none()
        );
    }
}
