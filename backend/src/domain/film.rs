//! Film entity and its inbound payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::validation::{ValidationError, Violations};

/// Maximum accepted length of a film description, in characters.
pub const DESCRIPTION_MAX: usize = 200;

/// Minimum accepted release date: the first public film screening.
pub fn release_date_floor() -> NaiveDate {
    match NaiveDate::from_ymd_opt(1895, 12, 28) {
        Some(date) => date,
        None => panic!("release date floor is a valid calendar date"),
    }
}

/// A stored film.
///
/// Instances only exist with a positive identifier and fields that passed
/// [`FilmPayload::validate`]; the type is serialise-only so stored records
/// cannot be forged from raw JSON.
///
/// ## Invariants
/// - `id >= 1` and never changes once stored.
/// - `release_date` is never earlier than [`release_date_floor`].
/// - `duration >= 1` (whole minutes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "The Arrival of a Train")]
    name: String,
    description: Option<String>,
    #[schema(value_type = String, format = Date, example = "1896-01-06")]
    release_date: NaiveDate,
    /// Running time in whole minutes.
    #[schema(example = 50)]
    duration: i64,
}

impl Film {
    /// Attach an identifier to a validated draft.
    ///
    /// Callers (the repositories) must supply an `id >= 1`.
    pub fn new(id: i64, draft: NewFilm) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            release_date: draft.release_date,
            duration: draft.duration,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Film title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional synopsis.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Theatrical release date.
    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    /// Running time in whole minutes.
    pub fn duration(&self) -> i64 {
        self.duration
    }
}

/// A film draft whose fields passed validation but which has no storage
/// identity yet. `requested_id` is `Some` only when the caller supplied a
/// positive explicit identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFilm {
    requested_id: Option<i64>,
    name: String,
    description: Option<String>,
    release_date: NaiveDate,
    duration: i64,
}

impl NewFilm {
    /// Identifier requested by the caller, if any.
    pub fn requested_id(&self) -> Option<i64> {
        self.requested_id
    }

    /// Promote the draft into a full [`Film`] for an update, which requires
    /// an explicit identifier.
    pub fn into_update(self) -> Result<Film, ValidationError> {
        match self.requested_id {
            Some(id) => Ok(Film::new(id, self)),
            None => Err(ValidationError::single("id", "is required for update")),
        }
    }
}

/// Inbound film payload. Every field is optional so validation can report
/// all missing or invalid fields in one pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilmPayload {
    /// Omit to let the service assign an identifier.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    /// Running time in minutes; fractional values are truncated.
    #[serde(default)]
    pub duration: Option<f64>,
}

impl FilmPayload {
    /// Check every field constraint and return a validated draft, or the
    /// full list of violations.
    pub fn validate(self) -> Result<NewFilm, ValidationError> {
        let mut violations = Violations::new();

        let requested_id = validate_requested_id(self.id, &mut violations);

        let name = match self.name {
            Some(name) if !name.trim().is_empty() => Some(name),
            Some(_) => {
                violations.push("name", "must not be blank");
                None
            }
            None => {
                violations.push("name", "is required");
                None
            }
        };

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX {
                violations.push(
                    "description",
                    format!("must be at most {DESCRIPTION_MAX} characters"),
                );
            }
        }

        let release_date = match self.release_date {
            Some(date) if date < release_date_floor() => {
                violations.push("releaseDate", "must not be earlier than 1895-12-28");
                None
            }
            Some(date) => Some(date),
            None => {
                violations.push("releaseDate", "is required");
                None
            }
        };

        let duration = match self.duration.map(truncate_minutes) {
            Some(minutes) if minutes >= 1 => Some(minutes),
            Some(_) => {
                violations.push("duration", "must be a positive number of minutes");
                None
            }
            None => {
                violations.push("duration", "is required");
                None
            }
        };

        match (name, release_date, duration) {
            (Some(name), Some(release_date), Some(duration)) if violations.is_empty() => {
                Ok(NewFilm {
                    requested_id,
                    name,
                    description: self.description,
                    release_date,
                    duration,
                })
            }
            _ => Err(violations.into_error()),
        }
    }
}

/// Truncate a wire duration toward zero into whole minutes.
#[expect(
    clippy::cast_possible_truncation,
    reason = "truncation toward zero is the documented wire semantics"
)]
fn truncate_minutes(minutes: f64) -> i64 {
    minutes.trunc() as i64
}

/// Shared identifier rule: a caller-supplied id must not be negative, and
/// zero means "not assigned".
pub(super) fn validate_requested_id(id: Option<i64>, violations: &mut Violations) -> Option<i64> {
    match id {
        Some(id) if id < 0 => {
            violations.push("id", "must not be negative");
            None
        }
        Some(0) | None => None,
        Some(id) => Some(id),
    }
}
