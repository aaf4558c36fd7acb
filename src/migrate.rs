use anyhow::Result;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;

/// Create the clicks table and its FTS5 index if absent. Safe to call from
/// concurrent sessions; an existing schema is left untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clicks (
            id INTEGER PRIMARY KEY,
            doc_id TEXT NOT NULL,
            query TEXT NOT NULL,
            weight REAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Shadow index over the recorded query text; rows are written alongside
    // clicks in the same transaction (see store::append_click).
    sqlx::query(
        r#"
        CREATE VIRTUAL TABLE IF NOT EXISTS clicks_fts USING fts5(
            click_id UNINDEXED,
            query
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_clicks_doc_id ON clicks(doc_id)")
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn run_migrations(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    ensure_schema(&pool).await?;
    pool.close().await;
    Ok(())
}
