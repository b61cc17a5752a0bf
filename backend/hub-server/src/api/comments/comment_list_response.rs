use hub_core::Comment;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<Comment>,
}
