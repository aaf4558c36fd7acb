//! Event store: append-only click rows with full-text matching over the
//! recorded query text.
//!
//! Matching uses SQLite FTS5 with the default unicode61 tokenizer: bare
//! terms AND together, quoted phrases and `term*` prefixes work as usual.
//! A syntactically invalid match expression is reported by SQLite as an
//! error and propagates to the caller; zero matching rows is an empty
//! result, not an error.

use anyhow::Result;
use sqlx::{Row, SqlitePool};

use crate::models::{ClickEvent, IdWeight};

/// Insert one click event. The base row and its FTS shadow row are written
/// in a single transaction so the index never lags the table.
pub async fn append_click(pool: &SqlitePool, event: &ClickEvent) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("INSERT INTO clicks (doc_id, query, weight) VALUES (?, ?, ?)")
        .bind(&event.doc_id)
        .bind(&event.query)
        .bind(event.weight)
        .execute(&mut *tx)
        .await?;

    let click_id = result.last_insert_rowid();

    sqlx::query("INSERT INTO clicks_fts (click_id, query) VALUES (?, ?)")
        .bind(click_id)
        .bind(&event.query)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Full-text match `query_text` against recorded queries, group the matching
/// rows by document id and sum their weights. Result order is whatever the
/// engine produces; callers wanting ranked output sort on their side.
pub async fn aggregate_by_match(pool: &SqlitePool, query_text: &str) -> Result<Vec<IdWeight>> {
    let rows = sqlx::query(
        r#"
        SELECT c.doc_id, SUM(c.weight) AS total_weight
        FROM clicks_fts f
        JOIN clicks c ON c.id = f.click_id
        WHERE clicks_fts MATCH ?
        GROUP BY c.doc_id
        "#,
    )
    .bind(query_text)
    .fetch_all(pool)
    .await?;

    let results = rows
        .iter()
        .map(|row| IdWeight {
            doc_id: row.get("doc_id"),
            total_weight: row.get("total_weight"),
        })
        .collect();

    Ok(results)
}
