use hub_db::{Database, DatabaseOptions};

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_nested_path_when_connecting_then_directory_and_schema_created() {
    // Given
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("hub.db");

    // When
    let pool = Database::connect(&DatabaseOptions::new(&path)).await.unwrap();

    // Then
    assert_that!(path.exists(), eq(true));
    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name LIKE 'hub_%' ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_that!(
        tables,
        elements_are![
            eq("hub_activity_log"),
            eq("hub_comments"),
            eq("hub_projects"),
            eq("hub_tasks")
        ]
    );
}

#[tokio::test]
async fn given_file_database_when_connecting_then_wal_journal_enabled() {
    let temp_dir = TempDir::new().unwrap();
    let pool = Database::connect(&DatabaseOptions::new(temp_dir.path().join("hub.db")))
        .await
        .unwrap();

    let mode: String = sqlx::query_scalar("PRAGMA journal_mode")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_that!(mode.to_lowercase(), eq("wal"));
}

#[tokio::test]
async fn given_existing_database_when_reconnecting_then_migrations_are_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let options = DatabaseOptions::new(temp_dir.path().join("hub.db"));

    let first = Database::connect(&options).await.unwrap();
    first.close().await;
    let second = Database::connect(&options).await;

    assert_that!(second, ok(anything()));
}
