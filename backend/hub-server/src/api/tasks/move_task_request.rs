use serde::Deserialize;

/// Drop target of a drag-and-drop gesture.
#[derive(Debug, Deserialize)]
pub struct MoveTaskRequest {
    /// Destination column
    pub status: String,
    /// Zero-based slot in the destination column; clamped to its length
    pub drop_index: usize,
}
