//! Monotonic identifier allocator.

use std::sync::atomic::{AtomicI64, Ordering};

/// Produces unique positive identifiers, starting at 1.
///
/// Each repository owns one sequence, injected through its constructor so
/// tests get a fresh counter per case. `reserve` keeps the counter ahead of
/// caller-supplied identifiers, so `next` never returns a taken id.
#[derive(Debug, Default)]
pub struct IdSequence(AtomicI64);

impl IdSequence {
    /// A sequence whose first `next` call returns 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next unused identifier.
    pub fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Advance the counter to at least `id`.
    pub fn reserve(&self, id: i64) {
        self.0.fetch_max(id, Ordering::Relaxed);
    }
}
