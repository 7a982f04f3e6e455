//! Field validation primitives shared by the entity payloads.
//!
//! Validation is all-or-nothing: every constraint is checked and every
//! failure is reported, so a client sees the full list of violated
//! constraints in one round trip. Nothing is constructed or stored unless
//! the whole payload passes.

use serde::Serialize;
use thiserror::Error;

/// One failed field constraint. `field` uses the wire (JSON) field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// What the constraint expected.
    pub message: String,
}

/// Payload rejected because one or more field constraints failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field constraint(s) violated", .violations.len())]
pub struct ValidationError {
    /// Every violated constraint, in field order.
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Error carrying a single violation.
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation {
                field,
                message: message.into(),
            }],
        }
    }
}

/// Accumulator collecting violations while a payload is checked.
#[derive(Debug, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed constraint.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(Violation {
            field,
            message: message.into(),
        });
    }

    /// Whether every checked constraint passed so far.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the accumulator into a [`ValidationError`].
    pub fn into_error(self) -> ValidationError {
        ValidationError { violations: self.0 }
    }
}
