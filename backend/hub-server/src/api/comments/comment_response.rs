use hub_core::Comment;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}
