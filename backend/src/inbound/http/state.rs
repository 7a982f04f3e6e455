//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data`, so they depend on
//! the domain ports and a clock rather than on concrete storage.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{FilmRepository, UserRepository};
use crate::outbound::memory::{InMemoryFilmRepository, InMemoryUserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Film store.
    pub films: Arc<dyn FilmRepository>,
    /// User store.
    pub users: Arc<dyn UserRepository>,
    /// Source of "today" for date-bound validation.
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    pub fn new(
        films: Arc<dyn FilmRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            films,
            users,
            clock,
        }
    }

    /// Fresh in-memory stores with the system clock.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryFilmRepository::default()),
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(DefaultClock),
        )
    }

    /// Today's calendar date per the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}
