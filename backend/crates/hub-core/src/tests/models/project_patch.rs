use crate::{Patch, Project, ProjectPatch};

use googletest::prelude::*;
use serde_json::json;
use uuid::Uuid;

#[test]
fn given_new_statuses_when_applied_then_trimmed_and_tracked() {
    // Given
    let mut project = Project::new("Launch".to_string(), Uuid::new_v4());
    let patch = ProjectPatch {
        statuses: Patch::Value(vec![" Todo".to_string(), "Done ".to_string()]),
        ..Default::default()
    };

    // When
    let changes = patch.apply_to(&mut project).unwrap();

    // Then
    assert_that!(project.statuses, elements_are![eq("Todo"), eq("Done")]);
    assert_that!(changes.contains("statuses"), eq(true));
}

#[test]
fn given_empty_statuses_when_applied_then_rejected() {
    let mut project = Project::new("Launch".to_string(), Uuid::new_v4());
    let patch = ProjectPatch {
        statuses: Patch::Value(vec![]),
        ..Default::default()
    };

    assert_that!(patch.apply_to(&mut project), err(anything()));
    assert_that!(project.statuses.len(), eq(5));
}

#[test]
fn given_null_client_name_when_applied_then_cleared() {
    // Given
    let mut project = Project::new("Launch".to_string(), Uuid::new_v4());
    project.client_name = Some("Acme".to_string());
    let patch: ProjectPatch = serde_json::from_value(json!({ "client_name": null })).unwrap();

    // When
    let changes = patch.apply_to(&mut project).unwrap();

    // Then
    assert_that!(project.client_name, none());
    let (before, after) = changes.into_snapshots();
    assert_that!(before, some(eq(&json!({ "client_name": "Acme" }))));
    assert_that!(after, some(eq(&json!({ "client_name": null }))));
}

#[test]
fn given_null_name_when_validated_then_rejected() {
    let patch: ProjectPatch = serde_json::from_value(json!({ "name": null })).unwrap();

    assert_that!(patch.validate_shape(), err(anything()));
}
