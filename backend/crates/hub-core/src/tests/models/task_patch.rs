use crate::{CoreError, Patch, Task, TaskPatch, TaskPriority};

use googletest::prelude::*;
use serde_json::json;
use uuid::Uuid;

fn sample_task() -> Task {
    let mut task = Task::new(
        Uuid::new_v4(),
        "Draft brief".to_string(),
        "Backlog".to_string(),
        Uuid::new_v4(),
    );
    task.description = Some("Initial".to_string());
    task
}

#[test]
fn given_absent_fields_when_deserialized_then_patch_is_empty() {
    // Given
    let body = json!({});

    // When
    let patch: TaskPatch = serde_json::from_value(body).unwrap();

    // Then
    assert_that!(patch.is_empty(), eq(true));
}

#[test]
fn given_null_description_when_applied_then_description_cleared() {
    // Given
    let mut task = sample_task();
    let patch: TaskPatch = serde_json::from_value(json!({ "description": null })).unwrap();

    // When
    let changes = patch.apply_to(&mut task).unwrap();

    // Then
    assert_that!(task.description, none());
    assert_that!(changes.contains("description"), eq(true));
    assert_that!(changes.len(), eq(1));
}

#[test]
fn given_null_title_when_applied_then_validation_error_names_field() {
    // Given
    let mut task = sample_task();
    let patch: TaskPatch = serde_json::from_value(json!({ "title": null })).unwrap();

    // When
    let result = patch.apply_to(&mut task);

    // Then
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation { field: Some(ref f), .. } if f == "title"
    ));
    assert_that!(task.title, eq("Draft brief"));
}

#[test]
fn given_blank_title_when_validated_then_rejected() {
    let patch = TaskPatch {
        title: Patch::Value("   ".to_string()),
        ..Default::default()
    };

    assert_that!(patch.validate_shape(), err(anything()));
}

#[test]
fn given_negative_order_index_when_validated_then_rejected() {
    let patch = TaskPatch {
        order_index: Patch::Value(-5),
        ..Default::default()
    };

    assert_that!(patch.validate_shape(), err(anything()));
}

#[test]
fn given_unchanged_values_when_applied_then_no_changes_recorded() {
    // Given
    let mut task = sample_task();
    let patch = TaskPatch {
        title: Patch::Value("Draft brief".to_string()),
        status: Patch::Value("Backlog".to_string()),
        ..Default::default()
    };

    // When
    let changes = patch.apply_to(&mut task).unwrap();

    // Then
    assert_that!(changes.is_empty(), eq(true));
}

#[test]
fn given_several_fields_when_applied_then_only_changed_fields_snapshotted() {
    // Given
    let mut task = sample_task();
    let patch: TaskPatch = serde_json::from_value(json!({
        "title": "  Final brief ",
        "priority": "HIGH",
        "status": "Backlog"
    }))
    .unwrap();

    // When
    let changes = patch.apply_to(&mut task).unwrap();
    let (before, after) = changes.into_snapshots();

    // Then
    assert_that!(task.title, eq("Final brief"));
    assert_that!(task.priority, eq(TaskPriority::High));
    assert_that!(
        before,
        some(eq(&json!({ "title": "Draft brief", "priority": "NONE" })))
    );
    assert_that!(
        after,
        some(eq(&json!({ "title": "Final brief", "priority": "HIGH" })))
    );
}

#[test]
fn given_blank_description_when_applied_then_stored_as_none() {
    let mut task = sample_task();
    let patch = TaskPatch {
        description: Patch::Value("   ".to_string()),
        ..Default::default()
    };

    patch.apply_to(&mut task).unwrap();

    assert_that!(task.description, none());
}

#[test]
fn given_assignee_when_applied_then_set() {
    let mut task = sample_task();
    let assignee = Uuid::new_v4();
    let patch = TaskPatch {
        assignee_id: Patch::Value(assignee),
        ..Default::default()
    };

    patch.apply_to(&mut task).unwrap();

    assert_that!(task.assignee_id, some(eq(assignee)));
}
