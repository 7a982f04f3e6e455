//! In-memory user repository.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{RepositoryError, UserRepository};
use crate::domain::user::{NewUser, User};

use super::IdSequence;

/// Mutex-guarded map of users; the user sequence is independent of the film
/// sequence.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<i64, User>>,
    ids: IdSequence,
}

impl InMemoryUserRepository {
    /// An empty repository drawing identifiers from `ids`.
    pub fn new(ids: IdSequence) -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            ids,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i64, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Vec<User> {
        self.lock().values().cloned().collect()
    }

    async fn create(&self, draft: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.lock();
        let id = match draft.requested_id() {
            Some(id) => {
                if users.contains_key(&id) {
                    return Err(RepositoryError::IdentifierConflict { id });
                }
                self.ids.reserve(id);
                id
            }
            None => self.ids.next(),
        };
        let user = User::new(id, draft);
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn replace(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.lock();
        let id = user.id();
        if !users.contains_key(&id) {
            return Err(RepositoryError::IdentifierNotFound { id });
        }
        users.insert(id, user.clone());
        Ok(user)
    }
}
