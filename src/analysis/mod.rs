//! Heuristic deadline analysis.
//!
//! Pure, total functions from a [`DeadlineRecord`](crate::models::DeadlineRecord)
//! and a single "now" snapshot to a bounded [`PredictionResult`]: feature
//! extraction, completion-probability estimation, an ordered risk-factor
//! cascade, recommendation generation, and per-call historical aggregation,
//! composed by [`engine::analyze_deadline`].

pub mod engine;
pub mod features;
pub mod messages;
pub mod probability;
pub mod recommend;
pub mod risks;
pub mod stats;
pub mod types;

pub use engine::{analyze_deadline, analyze_deadline_at};
pub use types::{
    EnrichedDeadline, FeatureVector, HistoricalStats, Impact, PredictionResult, ResultSource,
    RiskFactor,
};
