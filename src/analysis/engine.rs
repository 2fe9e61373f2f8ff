use std::panic::{self, AssertUnwindSafe};

use chrono::{DateTime, Utc};

use crate::models::DeadlineRecord;

use super::messages::{AnalysisMessages, RECO_VERIFY_INPUT};
use super::types::{Impact, PredictionResult, ResultSource, RiskFactor};
use super::{features, probability, recommend, risks, stats};

/// Run the full heuristic analysis of one deadline.
///
/// Takes the "now" snapshot once at entry; see [`analyze_deadline_at`] for
/// the deterministic variant. Total: any unexpected internal fault is
/// caught, logged, and replaced by the minimal safe result rather than
/// propagated.
pub fn analyze_deadline(
    record: &DeadlineRecord,
    historical: Option<&[DeadlineRecord]>,
) -> PredictionResult {
    analyze_deadline_at(record, historical, Utc::now())
}

/// [`analyze_deadline`] with an explicit "now" snapshot.
pub fn analyze_deadline_at(
    record: &DeadlineRecord,
    historical: Option<&[DeadlineRecord]>,
    now: DateTime<Utc>,
) -> PredictionResult {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| analyze_inner(record, historical, now)));

    match outcome {
        Ok(result) => result,
        Err(_) => {
            tracing::error!(
                deadline_id = record.id.as_deref().unwrap_or("<none>"),
                "deadline analysis failed unexpectedly, returning safe fallback"
            );
            minimal_safe_result()
        }
    }
}

fn analyze_inner(
    record: &DeadlineRecord,
    historical: Option<&[DeadlineRecord]>,
    now: DateTime<Utc>,
) -> PredictionResult {
    // One extraction per call; every component sees the same snapshot.
    let features = features::extract(record, now);

    let completion_probability = probability::estimate(&features, historical);
    let risk_factors = risks::analyze(&features, historical);
    let recommendations = recommend::recommend(&features, &risk_factors);
    let historical_stats = historical
        .filter(|h| !h.is_empty())
        .map(|h| stats::aggregate(h, now));

    tracing::debug!(
        deadline_id = record.id.as_deref().unwrap_or("<none>"),
        probability = completion_probability,
        factors = risk_factors.len(),
        "deadline analysis complete"
    );

    PredictionResult {
        completion_probability,
        risk_factors,
        recommendations,
        historical_stats,
        source: ResultSource::Heuristic,
    }
}

/// The fixed fallback result for an unexpected orchestrator fault.
pub fn minimal_safe_result() -> PredictionResult {
    PredictionResult {
        completion_probability: 0.5,
        risk_factors: vec![RiskFactor::new(
            "Analysis error",
            Impact::Medium,
            AnalysisMessages::analysis_error(),
        )],
        recommendations: vec![RECO_VERIFY_INPUT.to_string()],
        historical_stats: None,
        source: ResultSource::SafeFallback,
    }
}
