pub mod bulk_order_request;
pub mod bulk_order_response;
pub mod move_task_request;
pub mod task_list_response;
pub mod task_response;
#[allow(clippy::module_inception)]
pub mod tasks;
