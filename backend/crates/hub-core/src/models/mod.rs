pub mod activity_action;
pub mod activity_log;
pub mod actor;
pub mod comment;
pub mod entity_type;
pub mod project;
pub mod project_patch;
pub mod task;
pub mod task_patch;
pub mod task_priority;
