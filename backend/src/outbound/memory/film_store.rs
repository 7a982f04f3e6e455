//! In-memory film repository.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::film::{Film, NewFilm};
use crate::domain::ports::{FilmRepository, RepositoryError};

use super::IdSequence;

/// Mutex-guarded map of films, process lifetime, initially empty.
///
/// The existence check and the write happen under one lock acquisition, so
/// concurrent handler invocations cannot observe a half-applied create or
/// replace.
#[derive(Debug, Default)]
pub struct InMemoryFilmRepository {
    films: Mutex<HashMap<i64, Film>>,
    ids: IdSequence,
}

impl InMemoryFilmRepository {
    /// An empty repository drawing identifiers from `ids`.
    pub fn new(ids: IdSequence) -> Self {
        Self {
            films: Mutex::new(HashMap::new()),
            ids,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i64, Film>> {
        // A poisoned guard still holds consistent data: writes are single
        // `insert` calls.
        self.films.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl FilmRepository for InMemoryFilmRepository {
    async fn list(&self) -> Vec<Film> {
        self.lock().values().cloned().collect()
    }

    async fn create(&self, draft: NewFilm) -> Result<Film, RepositoryError> {
        let mut films = self.lock();
        let id = match draft.requested_id() {
            Some(id) => {
                if films.contains_key(&id) {
                    return Err(RepositoryError::IdentifierConflict { id });
                }
                self.ids.reserve(id);
                id
            }
            None => self.ids.next(),
        };
        let film = Film::new(id, draft);
        films.insert(id, film.clone());
        Ok(film)
    }

    async fn replace(&self, film: Film) -> Result<Film, RepositoryError> {
        let mut films = self.lock();
        let id = film.id();
        if !films.contains_key(&id) {
            return Err(RepositoryError::IdentifierNotFound { id });
        }
        films.insert(id, film.clone());
        Ok(film)
    }
}
