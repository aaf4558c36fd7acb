//! Core data models for the click ledger.
//!
//! These types represent the click events flowing into the store and the
//! aggregated weight sums flowing back out of it.

/// One recorded click: a document selected in response to a query, with a
/// signal weight. Immutable once written; repeated clicks for the same
/// document and query accumulate as separate rows.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub doc_id: String,
    pub query: String,
    pub weight: f64,
}

/// Aggregated relevance signal for one document: the sum of the weights of
/// every click whose recorded query matched. Computed per request, never
/// stored.
#[derive(Debug, Clone)]
pub struct IdWeight {
    pub doc_id: String,
    pub total_weight: f64,
}
