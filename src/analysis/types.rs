use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::DeadlineRecord;

// ---------------------------------------------------------------------------
// Impact
// ---------------------------------------------------------------------------

/// Ordinal impact of a risk factor. The ordering is informational only;
/// the analyzer never reorders its output by impact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
    Critical,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

// ---------------------------------------------------------------------------
// FeatureVector
// ---------------------------------------------------------------------------

/// Derived summary of one deadline at a single "now" snapshot.
///
/// Computed fresh per top-level call so the time-derived fields stay
/// mutually consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Signed days until the due instant; negative means overdue.
    pub days_until_due: f64,
    pub overdue: bool,
    /// 1–4; unrecognized priority labels fall back to 2.
    pub priority_level: u8,
    /// In [-1.0, 1.0]; unrecognized status labels fall back to 0.0.
    pub status_progress: f64,
    /// Description present and longer than 10 characters.
    pub has_description: bool,
    pub title_word_count: usize,
    pub weekend_due: bool,
    /// Hour component of the due instant, 0–23.
    pub due_hour: u32,
}

// ---------------------------------------------------------------------------
// RiskFactor
// ---------------------------------------------------------------------------

/// One identified risk. `description` is absent only when the factor was
/// synthesized by the text-rescue stages of the degradation chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub impact: Impact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RiskFactor {
    pub fn new(factor: impl Into<String>, impact: Impact, description: impl Into<String>) -> Self {
        Self {
            factor: factor.into(),
            impact,
            description: Some(description.into()),
        }
    }

    /// Factor synthesized from rescued free text; impact is always medium.
    pub fn rescued(factor: impl Into<String>) -> Self {
        Self {
            factor: factor.into(),
            impact: Impact::Medium,
            description: None,
        }
    }
}

// ---------------------------------------------------------------------------
// HistoricalStats
// ---------------------------------------------------------------------------

/// Per-call aggregation over a supplied collection of deadlines.
/// Never cached; an empty collection yields the zeroed default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoricalStats {
    pub count: usize,
    pub overdue_count: usize,
    pub overdue_percentage: f64,
    pub avg_days_left: f64,
    /// Raw lowercased priority label -> share of total, in percent.
    pub priority_distribution: HashMap<String, f64>,
    /// Raw lowercased status label -> share of total, in percent.
    pub status_distribution: HashMap<String, f64>,
}

// ---------------------------------------------------------------------------
// PredictionResult & ResultSource
// ---------------------------------------------------------------------------

/// Which path produced a result. Callers get the same value contract either
/// way; the tag exists for observability of degradation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    /// Direct heuristic analysis.
    Heuristic,
    /// Model output carried a parseable embedded object.
    ModelStructured,
    /// Model output was rescued by pattern matching.
    ModelRescued,
    /// The orchestrator hit an unexpected fault and substituted the
    /// minimal safe result.
    SafeFallback,
}

/// The single result contract shared by the heuristic path and the
/// degradation chain. Probability is always within [0, 1]; both lists are
/// always non-empty on the normalization path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub completion_probability: f64,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_stats: Option<HistoricalStats>,
    pub source: ResultSource,
}

// ---------------------------------------------------------------------------
// EnrichedDeadline
// ---------------------------------------------------------------------------

/// A deadline paired with its computed features, for context building by
/// the consuming layer.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedDeadline {
    #[serde(flatten)]
    pub record: DeadlineRecord,
    pub features: FeatureVector,
    /// Same value as `features.days_until_due`, surfaced at the top level.
    pub days_left: f64,
    /// Status progress scaled to 0–100.
    pub completion_percent: f64,
}
