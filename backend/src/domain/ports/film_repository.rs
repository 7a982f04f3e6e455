//! Port abstraction for film storage adapters.

use async_trait::async_trait;

use crate::domain::film::{Film, NewFilm};

use super::RepositoryError;

/// Authoritative store of films, keyed by identifier.
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Return every stored film; order is unspecified.
    async fn list(&self) -> Vec<Film>;

    /// Insert a new film, resolving its identifier (allocator or the
    /// caller's requested id).
    ///
    /// Fails with [`RepositoryError::IdentifierConflict`] when the requested
    /// identifier is already taken; the store is left unchanged.
    async fn create(&self, draft: NewFilm) -> Result<Film, RepositoryError>;

    /// Overwrite the full record at an existing identifier.
    ///
    /// Fails with [`RepositoryError::IdentifierNotFound`] when the
    /// identifier is absent; replace never creates a record.
    async fn replace(&self, film: Film) -> Result<Film, RepositoryError>;
}
