//! # Click Ledger CLI (`clickd`)
//!
//! The `clickd` binary is the primary interface for the click ledger. It
//! provides commands for database initialization, recording click events,
//! aggregate queries, statistics, and starting the HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! clickd --config ./config/click.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `clickd init` | Create the SQLite database and schema |
//! | `clickd record <doc_id> -q "<query>"` | Record one click event |
//! | `clickd ids "<query>"` | Sum click weights per document for matching queries |
//! | `clickd stats` | Show event counts and database size |
//! | `clickd serve` | Start the HTTP server |
//!
//! ## Examples
//!
//! ```bash
//! # Initialize the database
//! clickd init --config ./config/click.toml
//!
//! # Record a click on document A under the query "red shoes"
//! clickd record A --query "red shoes" --weight 2.0
//!
//! # Which documents match "red", by summed click weight?
//! clickd ids "red"
//!
//! # Start the HTTP server
//! clickd serve --config ./config/click.toml
//! ```

mod config;
mod db;
mod ids;
mod migrate;
mod models;
mod record;
mod server;
mod stats;
mod store;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Click Ledger CLI — a click-through feedback store with full-text query
/// matching.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/click.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "clickd",
    about = "Click Ledger — a click-through feedback store with full-text query matching",
    version,
    long_about = "Click Ledger records per-query, per-document click events with a weight \
    and answers aggregate relevance lookups by full-text matching the recorded query strings. \
    It exposes the same operations over a CLI and an HTTP API backed by a single SQLite file."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/click.toml`. Database path, server bind address,
    /// and the default click weight are read from this file.
    #[arg(long, global = true, default_value = "./config/click.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file, the clicks table, and its FTS5
    /// index. This command is idempotent — running it multiple times is
    /// safe, and every other command creates the schema lazily anyway.
    Init,

    /// Record one click event.
    ///
    /// Appends a `(doc_id, query, weight)` row. No dedup: repeated clicks
    /// accumulate and are summed at query time.
    Record {
        /// Identifier of the clicked document.
        doc_id: String,

        /// The query text under which the click occurred.
        #[arg(long, short)]
        query: String,

        /// Signal weight for this click (any finite float, negative allowed).
        /// Defaults to `ingest.default_weight` from the config file.
        #[arg(long, short)]
        weight: Option<f64>,
    },

    /// Aggregate click weights per document.
    ///
    /// Full-text matches the stored query strings and prints one line per
    /// document with its summed weight, strongest first.
    Ids {
        /// Full-text match expression (FTS5 syntax: bare terms AND together).
        query: String,
    },

    /// Show database statistics.
    ///
    /// Prints event counts, distinct document and query counts, and the
    /// size of the database file.
    Stats,

    /// Start the HTTP server.
    ///
    /// Binds to the address configured in `[server].bind` and serves the
    /// ingestion and aggregation endpoints.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Record {
            doc_id,
            query,
            weight,
        } => {
            record::run_record(&cfg, &doc_id, &query, weight).await?;
        }
        Commands::Ids { query } => {
            ids::run_ids(&cfg, &query).await?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
