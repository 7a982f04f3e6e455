//! Process-local storage adapters backing the repository ports.

mod film_store;
mod sequence;
mod user_store;

pub use film_store::InMemoryFilmRepository;
pub use sequence::IdSequence;
pub use user_store::InMemoryUserRepository;
