//! Click ingestion for the CLI.
//!
//! Mirrors the `PUT /click/{id}` endpoint: validates the weight, falls back
//! to the configured default, and appends exactly one event.

use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::models::ClickEvent;
use crate::store;

pub async fn run_record(
    config: &Config,
    doc_id: &str,
    query: &str,
    weight: Option<f64>,
) -> Result<()> {
    let weight = match weight {
        Some(w) if !w.is_finite() => anyhow::bail!("weight must be a finite number"),
        Some(w) => w,
        None => config.ingest.default_weight,
    };

    let pool = db::open(config).await?;
    store::append_click(
        &pool,
        &ClickEvent {
            doc_id: doc_id.to_string(),
            query: query.to_string(),
            weight,
        },
    )
    .await?;
    pool.close().await;

    println!("OK");
    Ok(())
}
