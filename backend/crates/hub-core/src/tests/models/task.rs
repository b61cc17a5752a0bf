use crate::{Task, TaskPriority, Versioned};

use chrono::Utc;
use uuid::Uuid;

#[test]
fn test_task_new() {
    let project_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let task = Task::new(project_id, "Write copy".to_string(), "Backlog".to_string(), user_id);

    assert_eq!(task.project_id, project_id);
    assert_eq!(task.status, "Backlog");
    assert_eq!(task.priority, TaskPriority::None);
    assert_eq!(task.version, 1);
    assert_eq!(task.created_by, user_id);
    assert!(task.tags.is_empty());
    assert!(!task.is_deleted());
}

#[test]
fn test_task_versioned_reflects_soft_delete() {
    let mut task = Task::new(Uuid::new_v4(), "T".to_string(), "Backlog".to_string(), Uuid::new_v4());
    task.deleted_at = Some(Utc::now());

    assert!(Versioned::is_deleted(&task));
    assert_eq!(Versioned::id(&task), task.id);
    assert_eq!(Versioned::version(&task), 1);
}
