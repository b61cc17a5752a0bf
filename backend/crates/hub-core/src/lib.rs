pub mod clock;
pub mod error;
pub mod field_change_builder;
pub mod models;
pub mod ordering;
pub mod patch;
pub mod version_guard;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use field_change_builder::{FieldChangeBuilder, FieldChanges};
pub use models::activity_action::ActivityAction;
pub use models::activity_log::ActivityLogEntry;
pub use models::actor::{Actor, Role};
pub use models::comment::Comment;
pub use models::entity_type::EntityType;
pub use models::project::{DEFAULT_PRIORITIES, DEFAULT_PROJECT_STATUS, DEFAULT_STATUSES, Project};
pub use models::project_patch::ProjectPatch;
pub use models::task::Task;
pub use models::task_patch::TaskPatch;
pub use models::task_priority::TaskPriority;
pub use ordering::{
    ColumnEntry, ORDER_GAP, OrderAssignment, assign_order_indices, next_order_index,
    plan_column_drop,
};
pub use patch::Patch;
pub use version_guard::{GuardDecision, MutationOutcome, VersionConflict, VersionGuard, Versioned};
