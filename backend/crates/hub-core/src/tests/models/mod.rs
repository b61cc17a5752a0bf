mod actor;
mod enums;
mod project;
mod project_patch;
mod task;
mod task_patch;
