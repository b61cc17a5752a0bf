use hub_core::Task;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}
