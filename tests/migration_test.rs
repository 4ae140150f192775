//! Schema management tests.

mod common;

use common::test_database;

#[tokio::test]
async fn test_status_reports_applied_migration() {
    let db = test_database().await;

    let status = db.migration_status().await.unwrap();

    assert_eq!(status.len(), 1);
    assert_eq!(status[0].0, "m20240101_000001_create_users_table");
    assert!(status[0].1);
}

#[tokio::test]
async fn test_rollback_then_reapply() {
    let db = test_database().await;

    db.rollback_migration().await.unwrap();
    assert!(!db.migration_status().await.unwrap()[0].1);

    db.run_migrations().await.unwrap();
    assert!(db.migration_status().await.unwrap()[0].1);
}

#[tokio::test]
async fn test_ping() {
    let db = test_database().await;
    assert!(db.ping().await.is_ok());
}
