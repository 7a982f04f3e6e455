//! Port abstraction for user storage adapters.

use async_trait::async_trait;

use crate::domain::user::{NewUser, User};

use super::RepositoryError;

/// Authoritative store of users, keyed by identifier.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user; order is unspecified.
    async fn list(&self) -> Vec<User>;

    /// Insert a new user, resolving its identifier (allocator or the
    /// caller's requested id).
    ///
    /// Fails with [`RepositoryError::IdentifierConflict`] when the requested
    /// identifier is already taken; the store is left unchanged.
    async fn create(&self, draft: NewUser) -> Result<User, RepositoryError>;

    /// Overwrite the full record at an existing identifier.
    ///
    /// Fails with [`RepositoryError::IdentifierNotFound`] when the
    /// identifier is absent; replace never creates a record.
    async fn replace(&self, user: User) -> Result<User, RepositoryError>;
}
