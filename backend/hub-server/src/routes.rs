use crate::api::{activity::activity, comments::comments, projects::projects, tasks::tasks};
use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Projects
        .route(
            "/api/v1/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/api/v1/projects/{id}",
            get(projects::get_project)
                .patch(projects::update_project)
                .delete(projects::delete_project),
        )
        // Tasks. reorder and bulk-order are matched ahead of /tasks/{id}: any
        // other method on them is a 405, never a task lookup
        .route(
            "/api/v1/tasks",
            get(tasks::list_tasks).post(tasks::create_task),
        )
        .route("/api/v1/tasks/reorder", patch(tasks::reorder_tasks))
        .route("/api/v1/tasks/bulk-order", patch(tasks::bulk_order_tasks))
        .route(
            "/api/v1/tasks/{id}",
            get(tasks::get_task)
                .patch(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/api/v1/tasks/{id}/move", post(tasks::move_task))
        // Comments
        .route(
            "/api/v1/tasks/{id}/comments",
            get(comments::list_comments),
        )
        .route("/api/v1/comments", post(comments::create_comment))
        // Activity log
        .route("/api/v1/activity", get(activity::list_activity))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
