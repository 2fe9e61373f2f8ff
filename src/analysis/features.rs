use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

use crate::models::DeadlineRecord;

use super::types::{EnrichedDeadline, FeatureVector};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A description shorter than this carries no real signal.
const MIN_SUBSTANTIVE_DESCRIPTION_CHARS: usize = 10;

// ---------------------------------------------------------------------------
// Label vocabularies
// ---------------------------------------------------------------------------
// The producing system is bilingual (English/French). Both vocabularies are
// accepted, case-insensitively; anything else degrades to the documented
// default rather than erroring.

/// Map a priority label to its level 1–4. Unrecognized labels map to 2.
pub fn priority_level(label: &str) -> u8 {
    match label.to_lowercase().as_str() {
        "critical" | "critique" => 4,
        "high" | "haute" => 3,
        "medium" | "moyenne" => 2,
        "low" | "basse" => 1,
        _ => 2,
    }
}

/// Map a status label to a progress value in [-1.0, 1.0].
/// Unrecognized labels map to 0.0.
pub fn status_progress(label: &str) -> f64 {
    match label.to_lowercase().as_str() {
        "new" | "nouvelle" => 0.0,
        "in progress" | "in-progress" | "en cours" => 0.5,
        "waiting" | "en attente" => 0.3,
        "completed" | "complétée" | "done" | "terminée" => 1.0,
        "cancelled" | "annulée" => -1.0,
        _ => 0.0,
    }
}

/// Whether a status label counts as completed for historical rate purposes.
pub fn is_completed_label(label: &str) -> bool {
    matches!(
        label.to_lowercase().as_str(),
        "completed" | "done" | "complétée" | "terminée"
    )
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract the feature vector of one deadline against a single `now`
/// snapshot. Total: unparseable labels degrade to defaults, nothing fails.
pub fn extract(record: &DeadlineRecord, now: DateTime<Utc>) -> FeatureVector {
    let days_until_due = (record.due_at - now).num_seconds() as f64 / SECONDS_PER_DAY;

    let has_description = record
        .description
        .as_deref()
        .is_some_and(|d| d.chars().count() > MIN_SUBSTANTIVE_DESCRIPTION_CHARS);

    FeatureVector {
        days_until_due,
        overdue: days_until_due < 0.0,
        priority_level: priority_level(&record.priority),
        status_progress: status_progress(&record.status),
        has_description,
        title_word_count: record.title.split_whitespace().count(),
        weekend_due: matches!(record.due_at.weekday(), Weekday::Sat | Weekday::Sun),
        due_hour: record.due_at.hour(),
    }
}

/// Pair each deadline with its features plus the two derived convenience
/// fields the consuming layer surfaces (days left, completion percent).
pub fn enrich(records: &[DeadlineRecord], now: DateTime<Utc>) -> Vec<EnrichedDeadline> {
    records
        .iter()
        .map(|record| {
            let features = extract(record, now);
            EnrichedDeadline {
                days_left: features.days_until_due,
                completion_percent: features.status_progress * 100.0,
                record: record.clone(),
                features,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(due_at: DateTime<Utc>, status: &str, priority: &str) -> DeadlineRecord {
        DeadlineRecord {
            id: None,
            title: "Prepare quarterly report".into(),
            description: Some("Consolidate figures across all teams".into()),
            due_at,
            status: status.into(),
            priority: priority.into(),
            project_id: None,
            project_name: None,
        }
    }

    fn now() -> DateTime<Utc> {
        // A Monday, 10:00 UTC.
        "2026-08-24T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn priority_levels_cover_both_vocabularies() {
        assert_eq!(priority_level("critical"), 4);
        assert_eq!(priority_level("Critique"), 4);
        assert_eq!(priority_level("HIGH"), 3);
        assert_eq!(priority_level("haute"), 3);
        assert_eq!(priority_level("medium"), 2);
        assert_eq!(priority_level("basse"), 1);
    }

    #[test]
    fn unknown_priority_defaults_to_two() {
        assert_eq!(priority_level("urgentish"), 2);
        assert_eq!(priority_level(""), 2);
        // Repeated extraction keeps the default stable.
        assert_eq!(priority_level("urgentish"), 2);
    }

    #[test]
    fn status_progress_covers_both_vocabularies() {
        assert_eq!(status_progress("new"), 0.0);
        assert_eq!(status_progress("En Cours"), 0.5);
        assert_eq!(status_progress("waiting"), 0.3);
        assert_eq!(status_progress("terminée"), 1.0);
        assert_eq!(status_progress("cancelled"), -1.0);
        assert_eq!(status_progress("someday"), 0.0);
    }

    #[test]
    fn completed_set_includes_synonyms() {
        assert!(is_completed_label("Completed"));
        assert!(is_completed_label("done"));
        assert!(is_completed_label("complétée"));
        assert!(is_completed_label("terminée"));
        assert!(!is_completed_label("cancelled"));
    }

    #[test]
    fn days_until_due_uses_second_resolution() {
        let features = extract(&record(now() + Duration::hours(36), "new", "low"), now());
        assert!((features.days_until_due - 1.5).abs() < 1e-9);
        assert!(!features.overdue);
    }

    #[test]
    fn overdue_when_due_before_now() {
        let features = extract(&record(now() - Duration::days(2), "new", "low"), now());
        assert!(features.overdue);
        assert!(features.days_until_due < 0.0);
    }

    #[test]
    fn weekend_and_hour_come_from_due_instant() {
        // Saturday, 19:00.
        let due: DateTime<Utc> = "2026-08-29T19:00:00Z".parse().unwrap();
        let features = extract(&record(due, "new", "low"), now());
        assert!(features.weekend_due);
        assert_eq!(features.due_hour, 19);

        let weekday_due: DateTime<Utc> = "2026-08-26T10:00:00Z".parse().unwrap();
        let features = extract(&record(weekday_due, "new", "low"), now());
        assert!(!features.weekend_due);
    }

    #[test]
    fn short_description_is_not_substantive() {
        let mut r = record(now() + Duration::days(1), "new", "low");
        r.description = Some("short".into());
        assert!(!extract(&r, now()).has_description);
        r.description = None;
        assert!(!extract(&r, now()).has_description);
        r.description = Some("long enough to carry signal".into());
        assert!(extract(&r, now()).has_description);
    }

    #[test]
    fn title_word_count_splits_on_whitespace() {
        let features = extract(&record(now() + Duration::days(1), "new", "low"), now());
        assert_eq!(features.title_word_count, 3);
    }

    #[test]
    fn enrich_surfaces_days_left_and_completion() {
        let records = vec![record(now() + Duration::days(2), "en cours", "haute")];
        let enriched = enrich(&records, now());
        assert_eq!(enriched.len(), 1);
        assert!((enriched[0].days_left - 2.0).abs() < 1e-9);
        assert!((enriched[0].completion_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn enrich_empty_input_yields_empty_output() {
        assert!(enrich(&[], now()).is_empty());
    }
}
