//! Database statistics and health overview.
//!
//! Provides a quick summary of what the ledger holds: event counts, distinct
//! document and query counts, and the size of the database file. Used by
//! `clickd stats` to give confidence that clicks are actually landing.

use anyhow::Result;

use crate::config::Config;
use crate::db;

/// Run the stats command: query the database and print a summary.
pub async fn run_stats(config: &Config) -> Result<()> {
    let pool = db::open(config).await?;

    let total_events: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
        .fetch_one(&pool)
        .await?;

    let distinct_docs: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT doc_id) FROM clicks")
        .fetch_one(&pool)
        .await?;

    let distinct_queries: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT query) FROM clicks")
        .fetch_one(&pool)
        .await?;

    let total_weight: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(weight), 0.0) FROM clicks")
        .fetch_one(&pool)
        .await?;

    let db_size = std::fs::metadata(&config.db.path)
        .map(|m| m.len())
        .unwrap_or(0);

    println!("Click Ledger — Database Stats");
    println!("=============================");
    println!();
    println!("  Database:     {}", config.db.path.display());
    println!("  Size:         {}", format_bytes(db_size));
    println!();
    println!("  Click events: {}", total_events);
    println!("  Documents:    {}", distinct_docs);
    println!("  Queries:      {}", distinct_queries);
    println!("  Total weight: {:.3}", total_weight);
    println!();

    pool.close().await;
    Ok(())
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
