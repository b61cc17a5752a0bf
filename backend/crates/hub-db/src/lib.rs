pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{Database, DatabaseOptions};
pub use error::{DbError, Result};
pub use repositories::activity_log_repository::{ActivityLogQuery, ActivityLogRepository};
pub use repositories::comment_repository::CommentRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::task_repository::{TaskFilter, TaskRepository};
