//! Mutation pipeline: version guard, field merge, conditional write and
//! best-effort audit logging for projects, tasks and comments.

pub mod activity;
pub mod activity_recorder;
pub mod authorization;
pub mod comment;
pub mod context;
pub mod error;
pub mod guarded_write;
pub mod inputs;
pub mod project;
pub mod reorder;
pub mod task;
pub mod validator;


pub use activity_recorder::{ActivityRecorder, ActivitySink, SqliteActivitySink};
pub use authorization::require_admin;
pub use context::MutationContext;
pub use error::{MutationError, Result};
pub use guarded_write::VersionedStore;
pub use inputs::{ActivityQuery, BulkOrderItem, NewComment, NewProject, NewTask, ReorderRequest, TaskQuery};
pub use validator::Validator;
