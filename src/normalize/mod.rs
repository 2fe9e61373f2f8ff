//! Degradation chain: coerce raw, untrusted model output into the same
//! [`PredictionResult`] shape the heuristic path produces.
//!
//! Strictly staged fallback. Stage 1 extracts an embedded JSON object;
//! when that fails, stages 2–4 rescue a probability, then labeled sections,
//! then list items out of the free text. Every exit yields a fully
//! populated result: probability clamped, both lists non-empty, rescued
//! factors carrying impact medium. This module never fails.

pub mod parser;
pub mod rescue;

use crate::analysis::types::{PredictionResult, ResultSource, RiskFactor};

/// Rescue scans are bounded to this prefix of the input so pathologically
/// large text cannot blow up pattern matching.
pub const MAX_SCAN_BYTES: usize = 64 * 1024;

/// Factor substituted when no risk text can be located.
pub const DEFAULT_RISK_FACTOR: &str = "Tight schedule";

/// Recommendation substituted when no recommendation text can be located.
pub const DEFAULT_RECOMMENDATION: &str = "Plan the next steps";

const DEFAULT_PROBABILITY: f64 = 0.5;

/// Normalize raw model output into a guaranteed-valid prediction.
pub fn normalize_model_output(text: &str) -> PredictionResult {
    let text = bounded(text);

    match parser::parse_structured(text) {
        Ok(parsed) => {
            let risk_factors = if parsed.risk_factors.is_empty() {
                vec![RiskFactor::rescued(DEFAULT_RISK_FACTOR)]
            } else {
                parsed.risk_factors
            };
            let recommendations = if parsed.recommendations.is_empty() {
                vec![DEFAULT_RECOMMENDATION.to_string()]
            } else {
                parsed.recommendations
            };
            PredictionResult {
                completion_probability: parsed.completion_probability,
                risk_factors,
                recommendations,
                historical_stats: None,
                source: ResultSource::ModelStructured,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "model output not structured, rescuing from text");
            rescue_from_text(text)
        }
    }
}

/// Stages 2–4: probability by label, then section and list-item rescue,
/// run independently for risk factors and recommendations.
fn rescue_from_text(text: &str) -> PredictionResult {
    let completion_probability = rescue::rescue_probability(text)
        .unwrap_or(DEFAULT_PROBABILITY)
        .clamp(0.0, 1.0);

    let risk_factors = match rescue::risk_section(text) {
        Some(section) => rescue::parse_list_items(&section)
            .into_iter()
            .map(RiskFactor::rescued)
            .collect(),
        None => vec![RiskFactor::rescued(DEFAULT_RISK_FACTOR)],
    };

    let recommendations = match rescue::recommendation_section(text) {
        Some(section) => rescue::parse_list_items(&section),
        None => vec![DEFAULT_RECOMMENDATION.to_string()],
    };

    PredictionResult {
        completion_probability,
        risk_factors,
        recommendations,
        historical_stats: None,
        source: ResultSource::ModelRescued,
    }
}

/// Truncate to the scan cap on a char boundary.
fn bounded(text: &str) -> &str {
    if text.len() <= MAX_SCAN_BYTES {
        return text;
    }
    let mut end = MAX_SCAN_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
