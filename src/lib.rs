//! deadline-insight: heuristic scoring of task-deadline completion risk,
//! and lenient normalization of model-generated predictions into the same
//! structured result.
//!
//! Two entry points share one contract:
//! - [`analysis::analyze_deadline`] runs the direct heuristic path
//!   (features, probability, ordered risk factors, recommendations,
//!   optional historical stats);
//! - [`normalize::normalize_model_output`] coerces free-form model text
//!   into that shape through a staged degradation chain.
//!
//! Both are total: they never fail, and always return a
//! [`PredictionResult`] with a clamped probability and bounded lists. The
//! core holds no shared state and performs no I/O; each call is pure
//! relative to one "now" snapshot taken at entry, so concurrent callers
//! need no synchronization.

pub mod analysis;
pub mod models;
pub mod normalize;

pub use analysis::{
    analyze_deadline, analyze_deadline_at, EnrichedDeadline, FeatureVector, HistoricalStats,
    Impact, PredictionResult, ResultSource, RiskFactor,
};
pub use models::DeadlineRecord;
pub use normalize::normalize_model_output;
