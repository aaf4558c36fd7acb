//! Aggregation queries for the CLI.
//!
//! Mirrors the `GET /ids` endpoint. The store returns groups unordered; the
//! descending-weight sort below is a presentation choice made here, on the
//! caller side, so operators read the strongest signals first.

use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::store;

pub async fn run_ids(config: &Config, query: &str) -> Result<()> {
    let pool = db::open(config).await?;
    let mut results = store::aggregate_by_match(&pool, query).await?;
    pool.close().await;

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    results.sort_by(|a, b| {
        b.total_weight
            .partial_cmp(&a.total_weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.doc_id.cmp(&b.doc_id))
    });

    for r in &results {
        println!("{:<32} {:>10.3}", r.doc_id, r.total_weight);
    }

    Ok(())
}
