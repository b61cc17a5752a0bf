//! Optimistic concurrency check shared by every guarded write.

use serde::Serialize;
use uuid::Uuid;

/// A record carrying a monotonically increasing version.
pub trait Versioned {
    fn id(&self) -> Uuid;
    fn version(&self) -> i32;
    fn is_deleted(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Caller supplied no expected version; last write wins.
    Bypassed,
    /// Caller's expected version matches what is stored.
    Passed,
    Conflict { expected: i32, current_version: i32 },
}

impl GuardDecision {
    pub fn allows_write(&self) -> bool {
        !matches!(self, GuardDecision::Conflict { .. })
    }
}

pub struct VersionGuard;

impl VersionGuard {
    pub fn evaluate(expected: Option<i32>, current: i32) -> GuardDecision {
        match expected {
            None => GuardDecision::Bypassed,
            Some(expected) if expected == current => GuardDecision::Passed,
            Some(expected) => GuardDecision::Conflict {
                expected,
                current_version: current,
            },
        }
    }

    pub fn evaluate_record<R: Versioned>(expected: Option<i32>, record: &R) -> GuardDecision {
        Self::evaluate(expected, record.version())
    }
}

/// The stored state a stale writer lost against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionConflict<T> {
    pub current_version: i32,
    #[serde(rename = "current_data")]
    pub current: T,
}

impl<T: Versioned> VersionConflict<T> {
    pub fn from_current(current: T) -> Self {
        Self {
            current_version: current.version(),
            current,
        }
    }
}

/// Result of a guarded mutation. A conflict is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<T> {
    Applied(T),
    Conflict(VersionConflict<T>),
}

impl<T> MutationOutcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, MutationOutcome::Conflict(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            MutationOutcome::Applied(value) => Some(value),
            MutationOutcome::Conflict(_) => None,
        }
    }

    pub fn conflict(self) -> Option<VersionConflict<T>> {
        match self {
            MutationOutcome::Applied(_) => None,
            MutationOutcome::Conflict(conflict) => Some(conflict),
        }
    }
}
