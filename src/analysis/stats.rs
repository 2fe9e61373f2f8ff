use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::DeadlineRecord;

use super::types::HistoricalStats;

/// Aggregate a collection of deadlines into per-call statistics.
///
/// An empty collection yields the zeroed default; no division by zero is
/// possible. Distributions tally raw lowercased labels, not the mapped
/// feature buckets, so synonym labels stay in separate buckets. That
/// divergence from the estimator's view is deliberate and relied upon by
/// consumers.
pub fn aggregate(records: &[DeadlineRecord], now: DateTime<Utc>) -> HistoricalStats {
    if records.is_empty() {
        return HistoricalStats::default();
    }

    let total = records.len();
    let overdue_count = records.iter().filter(|r| r.due_at < now).count();

    let days_left_sum: f64 = records
        .iter()
        .map(|r| (r.due_at - now).num_seconds() as f64 / 86_400.0)
        .sum();

    HistoricalStats {
        count: total,
        overdue_count,
        overdue_percentage: overdue_count as f64 / total as f64 * 100.0,
        avg_days_left: days_left_sum / total as f64,
        priority_distribution: label_distribution(records.iter().map(|r| r.priority.as_str()), total),
        status_distribution: label_distribution(records.iter().map(|r| r.status.as_str()), total),
    }
}

fn label_distribution<'a>(
    labels: impl Iterator<Item = &'a str>,
    total: usize,
) -> HashMap<String, f64> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label.to_lowercase()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(label, count)| (label, count as f64 / total as f64 * 100.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2026-08-24T10:00:00Z".parse().unwrap()
    }

    fn record(days_offset: i64, status: &str, priority: &str) -> DeadlineRecord {
        DeadlineRecord {
            id: None,
            title: "task".into(),
            description: None,
            due_at: now() + Duration::days(days_offset),
            status: status.into(),
            priority: priority.into(),
            project_id: None,
            project_name: None,
        }
    }

    #[test]
    fn empty_input_returns_zeroed_stats() {
        let stats = aggregate(&[], now());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.overdue_count, 0);
        assert_eq!(stats.overdue_percentage, 0.0);
        assert_eq!(stats.avg_days_left, 0.0);
        assert!(stats.priority_distribution.is_empty());
        assert!(stats.status_distribution.is_empty());
    }

    #[test]
    fn counts_and_percentages() {
        let records = vec![
            record(-3, "new", "high"),
            record(2, "en cours", "high"),
            record(5, "completed", "low"),
            record(-1, "new", "medium"),
        ];
        let stats = aggregate(&records, now());
        assert_eq!(stats.count, 4);
        assert_eq!(stats.overdue_count, 2);
        assert!((stats.overdue_percentage - 50.0).abs() < 1e-9);
        // (-3 + 2 + 5 - 1) / 4
        assert!((stats.avg_days_left - 0.75).abs() < 1e-9);
        assert!((stats.priority_distribution["high"] - 50.0).abs() < 1e-9);
        assert!((stats.status_distribution["new"] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn distributions_use_raw_labels_not_buckets() {
        // "complétée" and "terminée" map to the same progress bucket in the
        // estimator, but the distribution keeps them separate on purpose.
        let records = vec![
            record(1, "complétée", "Haute"),
            record(1, "terminée", "high"),
        ];
        let stats = aggregate(&records, now());
        assert!((stats.status_distribution["complétée"] - 50.0).abs() < 1e-9);
        assert!((stats.status_distribution["terminée"] - 50.0).abs() < 1e-9);
        // Case-folded, so "Haute" and "haute" would merge; "haute" and
        // "high" do not.
        assert!((stats.priority_distribution["haute"] - 50.0).abs() < 1e-9);
        assert!((stats.priority_distribution["high"] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn single_record_distribution_is_total() {
        let stats = aggregate(&[record(1, "New", "LOW")], now());
        assert!((stats.status_distribution["new"] - 100.0).abs() < 1e-9);
        assert!((stats.priority_distribution["low"] - 100.0).abs() < 1e-9);
    }
}
