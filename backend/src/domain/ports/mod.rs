//! Driven ports implemented by storage adapters.

mod film_repository;
mod user_repository;

pub use film_repository::FilmRepository;
pub use user_repository::UserRepository;

use thiserror::Error;

/// Failures surfaced by entity repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A caller-supplied identifier is already taken.
    #[error("identifier {id} is already in use")]
    IdentifierConflict {
        /// The identifier that collided.
        id: i64,
    },
    /// The targeted identifier is not stored.
    #[error("identifier {id} does not exist")]
    IdentifierNotFound {
        /// The identifier that was looked up.
        id: i64,
    },
}
