//! Test database setup
#![allow(dead_code)]

use polls::poll::{DbStore, PollStore};
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;

/// Fresh in-memory SQLite store with the poll tables created.
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
pub async fn setup_test_database() -> Result<DatabaseConnection, DbErr> {
    let db = polls::db::connect("sqlite::memory:", 1).await?;
    polls::db::create_schema(&db).await?;
    Ok(db)
}

/// Wrap a connection the way the server shares it with handlers.
pub fn store_for(db: &DatabaseConnection) -> Arc<dyn PollStore> {
    Arc::new(DbStore::new(db.clone()))
}
