use crate::{GuardDecision, MutationOutcome, Task, VersionConflict, VersionGuard};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_no_expected_version_when_evaluated_then_bypassed() {
    let decision = VersionGuard::evaluate(None, 7);

    assert_that!(decision, eq(GuardDecision::Bypassed));
    assert_that!(decision.allows_write(), eq(true));
}

#[test]
fn given_matching_version_when_evaluated_then_passed() {
    assert_that!(VersionGuard::evaluate(Some(3), 3), eq(GuardDecision::Passed));
}

#[test]
fn given_stale_version_when_evaluated_then_conflict() {
    // Given
    let task = {
        let mut t = Task::new(Uuid::new_v4(), "T".into(), "Backlog".into(), Uuid::new_v4());
        t.version = 4;
        t
    };

    // When
    let decision = VersionGuard::evaluate_record(Some(2), &task);

    // Then
    assert_that!(
        decision,
        eq(GuardDecision::Conflict {
            expected: 2,
            current_version: 4
        })
    );
    assert_that!(decision.allows_write(), eq(false));
}

#[test]
fn given_conflict_when_serialized_then_carries_current_state() {
    // Given
    let mut task = Task::new(Uuid::new_v4(), "T".into(), "Backlog".into(), Uuid::new_v4());
    task.version = 6;

    // When
    let conflict = VersionConflict::from_current(task.clone());
    let json = serde_json::to_value(&conflict).unwrap();

    // Then
    assert_that!(json["current_version"].as_i64(), some(eq(6)));
    assert_that!(json["current_data"]["title"].as_str(), some(eq("T")));
}

#[test]
fn given_outcomes_when_unwrapped_then_variant_accessors_agree() {
    let task = Task::new(Uuid::new_v4(), "T".into(), "Backlog".into(), Uuid::new_v4());

    let applied = MutationOutcome::Applied(task.clone());
    let conflict = MutationOutcome::Conflict(VersionConflict::from_current(task));

    assert_that!(applied.is_applied(), eq(true));
    assert_that!(conflict.is_conflict(), eq(true));
    assert_that!(conflict.applied(), none());
}
