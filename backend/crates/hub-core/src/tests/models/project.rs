use crate::models::project::normalize_statuses;
use crate::{DEFAULT_PRIORITIES, DEFAULT_STATUSES, Project};

use chrono::Utc;
use uuid::Uuid;

#[test]
fn test_project_new() {
    let user_id = Uuid::new_v4();
    let project = Project::new("Website".to_string(), user_id);

    assert_eq!(project.name, "Website");
    assert_eq!(project.version, 1);
    assert_eq!(project.statuses, DEFAULT_STATUSES);
    assert_eq!(project.priorities, DEFAULT_PRIORITIES);
    assert_eq!(project.created_by, user_id);
    assert_eq!(project.updated_by, user_id);
    assert!(!project.is_deleted());
}

#[test]
fn test_project_is_deleted() {
    let mut project = Project::new("Test".to_string(), Uuid::new_v4());

    assert!(!project.is_deleted());

    project.deleted_at = Some(Utc::now());
    assert!(project.is_deleted());
}

#[test]
fn test_project_has_status() {
    let project = Project::new("Test".to_string(), Uuid::new_v4());

    assert!(project.has_status("Backlog"));
    assert!(!project.has_status("Blocked"));
    assert_eq!(project.first_status(), Some("Backlog"));
}

#[test]
fn test_normalize_statuses_trims_entries() {
    let statuses = vec![" Todo ".to_string(), "Done".to_string()];
    assert_eq!(normalize_statuses(&statuses).unwrap(), vec!["Todo", "Done"]);
}

#[test]
fn test_normalize_statuses_rejects_empty_blank_and_duplicates() {
    assert!(normalize_statuses(&[]).is_err());
    assert!(normalize_statuses(&["  ".to_string()]).is_err());
    assert!(normalize_statuses(&["Done".to_string(), "Done ".to_string()]).is_err());
}
