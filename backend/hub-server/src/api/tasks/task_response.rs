use hub_core::Task;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: Task,
}
