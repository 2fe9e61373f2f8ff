use crate::models::DeadlineRecord;

use super::features::is_completed_label;
use super::types::FeatureVector;

/// Weight given to the heuristic estimate when blending with the observed
/// historical completion rate.
const HEURISTIC_BLEND_WEIGHT: f64 = 0.7;

/// Estimate the probability that a deadline is met, in [0, 1].
///
/// Deterministic and total. The evaluation order is fixed and observable:
/// time bucket, then additive priority and status adjustments, then the
/// weekend penalty, then the historical blend, then the clamp.
pub fn estimate(features: &FeatureVector, historical: Option<&[DeadlineRecord]>) -> f64 {
    let mut probability = base_probability(features.days_until_due);

    probability += priority_adjustment(features.priority_level);
    probability += status_adjustment(features.status_progress);

    if features.weekend_due {
        probability -= 0.05;
    }

    if let Some(history) = historical.filter(|h| !h.is_empty()) {
        let completed = history
            .iter()
            .filter(|r| is_completed_label(&r.status))
            .count();
        let historical_rate = completed as f64 / history.len() as f64;
        probability =
            HEURISTIC_BLEND_WEIGHT * probability + (1.0 - HEURISTIC_BLEND_WEIGHT) * historical_rate;
    }

    probability.clamp(0.0, 1.0)
}

/// Base probability bucketed by remaining days; first matching tier wins.
fn base_probability(days_until_due: f64) -> f64 {
    if days_until_due < 0.0 {
        0.10
    } else if days_until_due < 1.0 {
        0.40
    } else if days_until_due < 3.0 {
        0.60
    } else if days_until_due < 7.0 {
        0.75
    } else {
        0.85
    }
}

fn priority_adjustment(level: u8) -> f64 {
    match level {
        2 => 0.05,
        3 => 0.10,
        4 => 0.15,
        _ => 0.0,
    }
}

/// Keyed on the exact progress values the extractor produces. Progress -1.0
/// (cancelled) matches none of the keys and contributes 0; that is existing
/// behavior and is kept as-is.
fn status_adjustment(progress: f64) -> f64 {
    if progress == 0.3 {
        0.10
    } else if progress == 0.5 {
        0.30
    } else if progress == 1.0 {
        0.50
    } else {
        0.0
    }
}
