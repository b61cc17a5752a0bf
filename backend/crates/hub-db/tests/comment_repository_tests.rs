mod common;

use common::{create_test_comment, create_test_pool, seed_project, seed_task};

use hub_db::CommentRepository;

use chrono::Duration;
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_comment_when_created_then_can_be_found_by_id() {
    // Given
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    let project = seed_project(&pool, user_id).await;
    let task = seed_task(&pool, project.id, user_id, "Backlog", 1000).await;
    let comment = create_test_comment(task.id, user_id, "Looks good");

    // When
    CommentRepository::create(&pool, &comment).await.unwrap();

    // Then
    let found = CommentRepository::find_by_id(&pool, comment.id).await.unwrap();
    assert_that!(found, some(eq(&comment)));
}

#[tokio::test]
async fn given_several_comments_when_finding_by_task_then_newest_first() {
    // Given
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    let project = seed_project(&pool, user_id).await;
    let task = seed_task(&pool, project.id, user_id, "Backlog", 1000).await;

    let older = create_test_comment(task.id, user_id, "first");
    let mut newer = create_test_comment(task.id, user_id, "second");
    newer.created_at = older.created_at + Duration::seconds(5);
    CommentRepository::create(&pool, &older).await.unwrap();
    CommentRepository::create(&pool, &newer).await.unwrap();

    // When
    let comments = CommentRepository::find_by_task(&pool, task.id).await.unwrap();

    // Then
    assert_that!(comments, len(eq(2)));
    assert_that!(comments[0].id, eq(newer.id));
    assert_that!(comments[1].id, eq(older.id));
}

#[tokio::test]
async fn given_comment_on_missing_task_when_created_then_rejected() {
    let pool = create_test_pool().await;
    let comment = create_test_comment(Uuid::new_v4(), Uuid::new_v4(), "orphan");

    let result = CommentRepository::create(&pool, &comment).await;

    assert_that!(result, err(anything()));
}
