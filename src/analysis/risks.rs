use crate::models::DeadlineRecord;

use super::features::is_completed_label;
use super::messages::AnalysisMessages;
use super::types::{FeatureVector, Impact, RiskFactor};

// Factor names are part of the contract: the recommendation generator keys
// on them exactly, and consumers display them verbatim.
pub const FACTOR_OVERDUE: &str = "Deadline overdue";
pub const FACTOR_IMMINENT: &str = "Deadline imminent";
pub const FACTOR_SHORT_RUNWAY: &str = "Short runway";
pub const FACTOR_HIGH_PRIORITY_LOW_PROGRESS: &str = "High-priority task with low progress";
pub const FACTOR_WEEKEND: &str = "Weekend deadline";
pub const FACTOR_OFF_HOURS: &str = "Off-hours deadline";
pub const FACTOR_UNFAVORABLE_HISTORY: &str = "Unfavorable history";

/// The history rules only apply once there is a minimally meaningful sample.
const MIN_HISTORY_FOR_RISK: usize = 3;

/// Analyze a deadline's features into an ordered list of risk factors.
///
/// Rules form an ordered cascade: each is checked independently and may
/// append at most one factor; earlier rules never suppress later ones. The
/// output order is the rule order, not severity order. Within the time rule
/// the three tiers are mutually exclusive.
pub fn analyze(features: &FeatureVector, historical: Option<&[DeadlineRecord]>) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    // [1] Time risk: at most one tier fires.
    let days_left = features.days_until_due;
    if days_left < 0.0 {
        factors.push(RiskFactor::new(
            FACTOR_OVERDUE,
            Impact::Critical,
            AnalysisMessages::overdue(days_left.trunc().abs() as i64),
        ));
    } else if days_left < 1.0 {
        factors.push(RiskFactor::new(
            FACTOR_IMMINENT,
            Impact::High,
            AnalysisMessages::imminent(),
        ));
    } else if days_left < 3.0 {
        factors.push(RiskFactor::new(
            FACTOR_SHORT_RUNWAY,
            Impact::Medium,
            AnalysisMessages::short_runway(days_left.trunc() as i64),
        ));
    }

    // [2] High priority with low progress.
    if features.priority_level >= 3 && features.status_progress < 0.5 {
        factors.push(RiskFactor::new(
            FACTOR_HIGH_PRIORITY_LOW_PROGRESS,
            Impact::High,
            AnalysisMessages::high_priority_low_progress(),
        ));
    }

    // [3] Weekend due date.
    if features.weekend_due {
        factors.push(RiskFactor::new(
            FACTOR_WEEKEND,
            Impact::Low,
            AnalysisMessages::weekend(),
        ));
    }

    // [4] Outside office hours.
    if features.due_hour < 9 || features.due_hour > 17 {
        factors.push(RiskFactor::new(
            FACTOR_OFF_HOURS,
            Impact::Low,
            AnalysisMessages::off_hours(),
        ));
    }

    // [5] Unfavorable history, only with a meaningful sample.
    if let Some(history) = historical.filter(|h| h.len() >= MIN_HISTORY_FOR_RISK) {
        let missed = history
            .iter()
            .filter(|r| !is_completed_label(&r.status))
            .count();
        let missed_rate = missed as f64 / history.len() as f64;
        if missed_rate > 0.5 {
            factors.push(RiskFactor::new(
                FACTOR_UNFAVORABLE_HISTORY,
                Impact::Medium,
                AnalysisMessages::unfavorable_history((missed_rate * 100.0).trunc() as i64),
            ));
        }
    }

    factors
}
