use crate::{ColumnEntry, ORDER_GAP, assign_order_indices, next_order_index, plan_column_drop};

use chrono::{Duration, Utc};
use googletest::prelude::*;
use proptest::prelude::*;
use uuid::Uuid;

fn column(order_indices: &[i32]) -> Vec<ColumnEntry> {
    let base = Utc::now();
    order_indices
        .iter()
        .enumerate()
        .map(|(i, order_index)| ColumnEntry {
            id: Uuid::new_v4(),
            order_index: *order_index,
            created_at: base + Duration::seconds(i as i64),
        })
        .collect()
}

// =========================================================================
// Property-Based Tests
// =========================================================================

proptest! {
    #[test]
    fn given_any_drop_when_planned_then_moved_task_appears_once(
        indices in prop::collection::vec(0i32..10_000, 0..20),
        drop_index in 0usize..40,
    ) {
        let col = column(&indices);
        let moved = Uuid::new_v4();

        let plan = plan_column_drop(&col, moved, drop_index);

        prop_assert_eq!(plan.len(), col.len() + 1);
        prop_assert_eq!(plan.iter().filter(|id| **id == moved).count(), 1);
        prop_assert_eq!(plan.iter().position(|id| *id == moved), Some(drop_index.min(col.len())));
    }

    #[test]
    fn given_distinct_ids_when_assigned_then_strictly_increasing_by_gap(count in 1usize..200) {
        let ids: Vec<Uuid> = (0..count).map(|_| Uuid::new_v4()).collect();

        let assignments = assign_order_indices(&ids).unwrap();

        for (i, assignment) in assignments.iter().enumerate() {
            prop_assert_eq!(assignment.task_id, ids[i]);
            prop_assert_eq!(assignment.order_index, (i as i32 + 1) * ORDER_GAP);
        }
    }

    #[test]
    fn given_any_max_when_next_index_then_strictly_greater(max in 0i32..1_000_000) {
        prop_assert!(next_order_index(Some(max)) > max);
    }
}

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn given_empty_column_when_next_index_then_one_gap() {
    assert_that!(next_order_index(None), eq(ORDER_GAP));
}

#[test]
fn given_existing_max_when_next_index_then_max_plus_gap() {
    assert_that!(next_order_index(Some(3000)), eq(4000));
}

#[test]
fn given_move_within_column_when_planned_then_task_relocated() {
    // Given: A(1000), B(2000), C(3000)
    let col = column(&[1000, 2000, 3000]);
    let (a, b, c) = (col[0].id, col[1].id, col[2].id);

    // When: A dropped at the end
    let plan = plan_column_drop(&col, a, 2);

    // Then
    assert_that!(plan, elements_are![eq(&b), eq(&c), eq(&a)]);
}

#[test]
fn given_drop_index_past_end_when_planned_then_appended() {
    let col = column(&[1000, 2000]);
    let moved = Uuid::new_v4();

    let plan = plan_column_drop(&col, moved, 99);

    assert_that!(plan.last(), some(eq(&moved)));
}

#[test]
fn given_tied_order_indices_when_planned_then_creation_order_breaks_tie() {
    // Given: equal indices, created in order
    let col = column(&[1000, 1000, 1000]);
    let moved = Uuid::new_v4();

    // When
    let plan = plan_column_drop(&col, moved, 0);

    // Then
    assert_that!(
        plan,
        elements_are![eq(&moved), eq(&col[0].id), eq(&col[1].id), eq(&col[2].id)]
    );
}

#[test]
fn given_empty_ids_when_assigned_then_rejected() {
    assert_that!(assign_order_indices(&[]), err(anything()));
}

#[test]
fn given_duplicate_ids_when_assigned_then_rejected() {
    let id = Uuid::new_v4();

    assert_that!(assign_order_indices(&[id, Uuid::new_v4(), id]), err(anything()));
}
