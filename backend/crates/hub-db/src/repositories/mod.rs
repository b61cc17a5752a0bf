pub mod activity_log_repository;
pub mod comment_repository;
pub mod project_repository;
pub mod task_repository;

mod row;
