pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    activity::{activity::list_activity, activity_list_response::ActivityListResponse},
    comments::{
        comment_list_response::CommentListResponse,
        comment_response::CommentResponse,
        comments::{create_comment, list_comments},
    },
    delete_query::DeleteQuery,
    error::ApiError,
    error::Result as ApiResult,
    extractors::actor::CurrentActor,
    projects::{
        list_projects_query::ListProjectsQuery,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
    },
    tasks::{
        bulk_order_request::BulkOrderRequest,
        bulk_order_response::BulkOrderResponse,
        move_task_request::MoveTaskRequest,
        task_list_response::TaskListResponse,
        task_response::TaskResponse,
        tasks::{
            bulk_order_tasks, create_task, delete_task, get_task, list_tasks, move_task,
            reorder_tasks, update_task,
        },
    },
    update_request::UpdateRequest,
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
