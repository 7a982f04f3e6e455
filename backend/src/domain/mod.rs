//! Domain types: entities, payload validation, ports, and the
//! transport-agnostic error payload.

pub mod error;
pub mod film;
pub mod ports;
pub mod user;
pub mod validation;

pub use error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use film::{DESCRIPTION_MAX, Film, FilmPayload, NewFilm, release_date_floor};
pub use user::{NewUser, User, UserPayload};
pub use validation::{ValidationError, Violation};
