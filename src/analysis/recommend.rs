use super::messages::*;
use super::risks::{
    FACTOR_HIGH_PRIORITY_LOW_PROGRESS, FACTOR_UNFAVORABLE_HISTORY, FACTOR_WEEKEND,
};
use super::types::{FeatureVector, RiskFactor};

/// Hard cap on the recommendation list; more than this overloads the reader.
const MAX_RECOMMENDATIONS: usize = 5;

/// Below this many entries the generic fallback set is appended.
const MIN_RECOMMENDATIONS: usize = 3;

/// Generate an ordered list of at most five recommendations.
///
/// Generation order is fixed: time-tier pairs first, then status, then
/// priority, then factor-keyed strings, then the generic fallback set when
/// the list would otherwise be short. Truncation keeps the earliest entries.
pub fn recommend(features: &FeatureVector, risk_factors: &[RiskFactor]) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    // Same mutually exclusive time tiers as the risk analyzer.
    let days_left = features.days_until_due;
    if days_left < 0.0 {
        recommendations.push(RECO_OVERDUE_RESCHEDULE.to_string());
        recommendations.push(RECO_OVERDUE_COMMUNICATE.to_string());
    } else if days_left < 1.0 {
        recommendations.push(RECO_IMMINENT_FOCUS.to_string());
        recommendations.push(RECO_IMMINENT_CLEAR_CALENDAR.to_string());
    } else if days_left < 3.0 {
        recommendations.push(RECO_SHORT_DAILY_BLOCK.to_string());
        recommendations.push(RECO_SHORT_UNBLOCK.to_string());
    }

    if features.status_progress < 0.3 {
        recommendations.push(RECO_DECOMPOSE.to_string());
        recommendations.push(RECO_MILESTONES.to_string());
    }

    if features.priority_level >= 3 {
        recommendations.push(RECO_DELEGATE.to_string());
        recommendations.push(RECO_MORE_RESOURCES.to_string());
    }

    // Factor-keyed strings; unmatched factor names contribute nothing.
    for factor in risk_factors {
        match factor.factor.as_str() {
            FACTOR_WEEKEND => recommendations.push(RECO_WEEKEND_FINISH_FRIDAY.to_string()),
            FACTOR_UNFAVORABLE_HISTORY => recommendations.push(RECO_HISTORY_ROOT_CAUSE.to_string()),
            FACTOR_HIGH_PRIORITY_LOW_PROGRESS => {
                recommendations.push(RECO_FOCUSED_SESSION.to_string())
            }
            _ => {}
        }
    }

    if recommendations.len() < MIN_RECOMMENDATIONS {
        recommendations.push(RECO_GENERIC_CHECKPOINTS.to_string());
        recommendations.push(RECO_GENERIC_DOCUMENT.to_string());
        recommendations.push(RECO_GENERIC_COMMUNICATE.to_string());
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
