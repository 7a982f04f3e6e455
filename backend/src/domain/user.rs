//! User entity and its inbound payload.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::film::validate_requested_id;
use crate::domain::validation::{ValidationError, Violations};

static LOGIN_RE: OnceLock<Regex> = OnceLock::new();

fn login_regex() -> &'static Regex {
    LOGIN_RE.get_or_init(|| {
        // ASCII word characters only; blanks and accented letters are out.
        let pattern = "^[A-Za-z0-9_]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("login regex failed to compile: {error}"))
    })
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Structural check: one '@' with non-empty, whitespace-free sides.
        let pattern = r"^[^@\s]+@[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// A stored user.
///
/// ## Invariants
/// - `id >= 1` and never changes once stored.
/// - `login` matches `^[A-Za-z0-9_]+$`.
/// - `name` is never blank: a missing or blank display name is replaced by
///   a copy of the login during validation, once, and not re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "ada@example.org")]
    email: String,
    #[schema(example = "ada_1815")]
    login: String,
    /// Display name; falls back to the login when not supplied.
    #[schema(example = "Ada Lovelace")]
    name: String,
    #[schema(value_type = String, format = Date, example = "1815-12-10")]
    birthday: NaiveDate,
}

impl User {
    /// Attach an identifier to a validated draft.
    ///
    /// Callers (the repositories) must supply an `id >= 1`.
    pub fn new(id: i64, draft: NewUser) -> Self {
        Self {
            id,
            email: draft.email,
            login: draft.login,
            name: draft.name,
            birthday: draft.birthday,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// E-mail address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Account login.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Display name; equals the login when none was supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date of birth.
    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }
}

/// A user draft whose fields passed validation but which has no storage
/// identity yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    requested_id: Option<i64>,
    email: String,
    login: String,
    name: String,
    birthday: NaiveDate,
}

impl NewUser {
    /// Identifier requested by the caller, if any.
    pub fn requested_id(&self) -> Option<i64> {
        self.requested_id
    }

    /// Promote the draft into a full [`User`] for an update, which requires
    /// an explicit identifier.
    pub fn into_update(self) -> Result<User, ValidationError> {
        match self.requested_id {
            Some(id) => Ok(User::new(id, self)),
            None => Err(ValidationError::single("id", "is required for update")),
        }
    }
}

/// Inbound user payload. Every field is optional so validation can report
/// all missing or invalid fields in one pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    /// Omit to let the service assign an identifier.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    /// Optional display name; a missing or blank value falls back to the
    /// login.
    #[serde(default)]
    pub name: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

impl UserPayload {
    /// Check every field constraint against `today` and return a validated
    /// draft, or the full list of violations.
    pub fn validate(self, today: NaiveDate) -> Result<NewUser, ValidationError> {
        let mut violations = Violations::new();

        let requested_id = validate_requested_id(self.id, &mut violations);

        let email = match self.email {
            Some(email) if email_regex().is_match(&email) => Some(email),
            Some(_) => {
                violations.push("email", "must be a valid e-mail address");
                None
            }
            None => {
                violations.push("email", "is required");
                None
            }
        };

        let login = match self.login {
            Some(login) if login_regex().is_match(&login) => Some(login),
            Some(_) => {
                violations.push("login", "must contain only letters, digits, or underscores");
                None
            }
            None => {
                violations.push("login", "is required");
                None
            }
        };

        let birthday = match self.birthday {
            Some(birthday) if birthday > today => {
                violations.push("birthday", "must not be in the future");
                None
            }
            Some(birthday) => Some(birthday),
            None => {
                violations.push("birthday", "is required");
                None
            }
        };

        match (email, login, birthday) {
            (Some(email), Some(login), Some(birthday)) if violations.is_empty() => {
                let name = match self.name {
                    Some(name) if !name.trim().is_empty() => name,
                    _ => login.clone(),
                };
                Ok(NewUser {
                    requested_id,
                    email,
                    login,
                    name,
                    birthday,
                })
            }
            _ => Err(violations.into_error()),
        }
    }
}

#[cfg(test)]
mod tests;
