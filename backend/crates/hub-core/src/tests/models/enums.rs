use crate::{ActivityAction, EntityType, TaskPriority};

use std::str::FromStr;

#[test]
fn test_task_priority_as_str() {
    assert_eq!(TaskPriority::Urgent.as_str(), "URGENT");
    assert_eq!(TaskPriority::None.as_str(), "NONE");
}

#[test]
fn test_task_priority_from_str_is_case_insensitive() {
    assert_eq!(TaskPriority::from_str("high").unwrap(), TaskPriority::High);
    assert_eq!(TaskPriority::from_str("MEDIUM").unwrap(), TaskPriority::Medium);
    assert!(TaskPriority::from_str("critical").is_err());
}

#[test]
fn test_task_priority_default() {
    assert_eq!(TaskPriority::default(), TaskPriority::None);
}

#[test]
fn test_task_priority_serializes_screaming_case() {
    let json = serde_json::to_string(&TaskPriority::Low).unwrap();
    assert_eq!(json, "\"LOW\"");
}

#[test]
fn test_entity_type_round_trips_through_str() {
    for entity_type in [
        EntityType::Project,
        EntityType::Task,
        EntityType::Comment,
        EntityType::User,
    ] {
        assert_eq!(EntityType::from_str(entity_type.as_str()).unwrap(), entity_type);
    }
    assert!(EntityType::from_str("sprint").is_err());
}

#[test]
fn test_activity_action_as_str() {
    assert_eq!(ActivityAction::Created.as_str(), "created");
    assert_eq!(ActivityAction::Updated.as_str(), "updated");
    assert_eq!(ActivityAction::Deleted.as_str(), "deleted");
    assert_eq!(ActivityAction::Restored.as_str(), "restored");
    assert!(ActivityAction::from_str("archived").is_err());
}

#[test]
fn test_unknown_values_name_their_field() {
    let priority = TaskPriority::from_str("critical").unwrap_err();
    assert_eq!(priority.field_name(), Some("priority"));
    assert!(priority.to_string().contains("'critical'"));

    let entity_type = EntityType::from_str("sprint").unwrap_err();
    assert_eq!(entity_type.field_name(), Some("entity_type"));
}
