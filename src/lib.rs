//! # Click Ledger
//!
//! A click-through feedback ledger: records per-query, per-document click
//! events with a weight, and answers "which document ids are most relevant
//! for this query" by full-text matching the recorded query strings and
//! summing weights per document.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐        ┌───────────────┐        ┌──────────────┐
//! │  Ingestion   │───────▶│  Event Store  │◀───────│ Aggregation  │
//! │ PUT /click/x │ append │ SQLite + FTS5 │ match  │  GET /ids    │
//! └──────────────┘        └───────────────┘        └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! clickd init                                # create database
//! clickd record A --query "red shoes" -w 2   # record a click
//! clickd ids "red"                           # aggregate matching clicks
//! clickd serve                               # start HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`store`] | Append and aggregate click events |
//! | [`record`] | CLI ingestion command |
//! | [`ids`] | CLI aggregation command |
//! | [`stats`] | Database statistics |
//! | [`server`] | HTTP server |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema creation |

pub mod config;
pub mod db;
pub mod ids;
pub mod migrate;
pub mod models;
pub mod record;
pub mod server;
pub mod stats;
pub mod store;
