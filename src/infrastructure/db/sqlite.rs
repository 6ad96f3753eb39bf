use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

use crate::{
    entities::{post::PostInsert, project::ProjectInsert},
    errors::AppError,
    repositories::{post::PostRepository, project::ProjectRepository, sqlx_repo::SqlxStore},
};

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        details TEXT,
        url TEXT,
        created_at TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT,
        created_at TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS messages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT,
        message TEXT,
        created_at TEXT
    )
    "#,
];

/// Opens the pool, creating the database file when it does not exist yet.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!(database_url, "Database connection established.");
    Ok(pool)
}

/// Creates the tables if absent and seeds one sample project and one sample
/// post into empty tables. Safe to run on every start.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    let mut store = SqlxStore::acquire(pool).await?;

    for statement in SCHEMA {
        sqlx::query(statement).execute(store.conn()).await?;
    }

    if store.count_projects().await? == 0 {
        let id = store.insert_project(&ProjectInsert::sample()).await?;
        info!(project_id = id, "Seeded sample project");
    }

    if store.count_posts().await? == 0 {
        let id = store.insert_post(&PostInsert::sample()).await?;
        info!(post_id = id, "Seeded sample post");
    }

    Ok(())
}
