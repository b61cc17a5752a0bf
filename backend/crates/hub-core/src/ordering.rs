//! Gap-based ordering of tasks inside a kanban column.
//!
//! New tasks land at the end of their column one gap past the current
//! maximum. Drag-and-drop recomputes the whole column as evenly spaced
//! multiples of the gap so later inserts have room.

use crate::{CoreError, Result as CoreErrorResult};

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const ORDER_GAP: i32 = 1000;

/// The slice of a task the ordering planner needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnEntry {
    pub id: Uuid,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAssignment {
    pub task_id: Uuid,
    pub order_index: i32,
}

/// Order index for a task appended to a column whose current maximum is `current_max`.
pub fn next_order_index(current_max: Option<i32>) -> i32 {
    current_max.unwrap_or(0).saturating_add(ORDER_GAP)
}

/// Final id sequence of `column` after dropping `moved` at `drop_index`.
///
/// The column is first put in display order (order index, then creation
/// time). `moved` is taken out wherever it is, then inserted at
/// `drop_index` clamped to the column length.
pub fn plan_column_drop(column: &[ColumnEntry], moved: Uuid, drop_index: usize) -> Vec<Uuid> {
    let mut ordered: Vec<&ColumnEntry> = column.iter().filter(|e| e.id != moved).collect();
    ordered.sort_by(|a, b| {
        a.order_index
            .cmp(&b.order_index)
            .then(a.created_at.cmp(&b.created_at))
    });

    let mut ids: Vec<Uuid> = ordered.into_iter().map(|e| e.id).collect();
    let at = drop_index.min(ids.len());
    ids.insert(at, moved);
    ids
}

/// Evenly spaced indices for `ids`: the i-th id gets `(i + 1) * ORDER_GAP`.
#[track_caller]
pub fn assign_order_indices(ids: &[Uuid]) -> CoreErrorResult<Vec<OrderAssignment>> {
    if ids.is_empty() {
        return Err(CoreError::field("ordered_task_ids", "No tasks to order"));
    }

    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(duplicate) = ids.iter().find(|id| !seen.insert(**id)) {
        return Err(CoreError::field(
            "ordered_task_ids",
            format!("Task {duplicate} listed more than once"),
        ));
    }

    let mut assignments = Vec::with_capacity(ids.len());
    for (i, id) in ids.iter().enumerate() {
        let order_index = i32::try_from(i + 1)
            .ok()
            .and_then(|slot| slot.checked_mul(ORDER_GAP))
            .ok_or_else(|| {
                CoreError::field("ordered_task_ids", "Too many tasks to order")
            })?;
        assignments.push(OrderAssignment {
            task_id: *id,
            order_index,
        });
    }

    Ok(assignments)
}
