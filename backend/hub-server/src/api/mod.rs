pub mod activity;
pub mod comments;
pub mod delete_query;
pub mod error;
pub mod extractors;
pub mod projects;
pub mod tasks;
pub mod update_request;
