//! Weighted market-prioritization scoring engine.
//!
//! The pipeline is a pure function over an immutable slice of raw market
//! records: derive per-column bounds over the whole set, normalize, aggregate
//! category scores, blend with the caller's weights, sort, and rank. Excluded
//! markets are filtered after the full-set ranking and the visible subset is
//! re-ranked densely from 1.

pub mod dataset;
pub mod domain;
pub mod scoring;
pub mod sizing;

pub use dataset::builtin_markets;
pub use domain::{MarketRecord, MarketScorecard, ScoringWeights, SortDirection, SortKey};
pub use scoring::{apply_exclusions, normalize_to_ten, score_markets};
pub use sizing::{market_sizing, visible_households, MarketSizing};
