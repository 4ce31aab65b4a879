use crate::models::{
    DailyAveragePoint, MoodEntry, Severity, SeverityCounts, StatsSummary, TimelinePoint, Trigger,
    TriggerCount,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Summarizes one user's entries for the analytics panel. Entries with an
/// unparseable timestamp still count toward totals and trigger counts but are
/// skipped by the date-based series.
pub fn build_summary(entries: &[MoodEntry]) -> StatsSummary {
    let total_entries = entries.len();

    let mut severity_counts = SeverityCounts::default();
    for entry in entries {
        match entry.severity {
            Severity::Low => severity_counts.low += 1,
            Severity::Medium => severity_counts.medium += 1,
            Severity::High => severity_counts.high += 1,
        }
    }

    let high_severity_pct = if total_entries == 0 {
        0.0
    } else {
        severity_counts.high as f64 / total_entries as f64 * 100.0
    };

    // First-seen order so ties resolve to the earliest trigger, then a stable
    // sort for the descending frequency list.
    let mut counts: Vec<(Trigger, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(t, _)| *t == entry.primary_trigger) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.primary_trigger, 1)),
        }
    }

    let mut top_trigger: Option<(Trigger, usize)> = None;
    for &(trigger, count) in &counts {
        if top_trigger.is_none_or(|(_, best)| count > best) {
            top_trigger = Some((trigger, count));
        }
    }

    let mut trigger_counts = counts;
    trigger_counts.sort_by(|a, b| b.1.cmp(&a.1));
    let trigger_counts = trigger_counts
        .into_iter()
        .map(|(trigger, count)| TriggerCount { trigger, count })
        .collect();

    let timeline = entries
        .iter()
        .map(|entry| TimelinePoint {
            timestamp: entry.timestamp.clone(),
            trigger: entry.primary_trigger,
            severity: entry.severity,
            level: entry.severity.level(),
        })
        .collect();

    let dates: Vec<NaiveDate> = entries
        .iter()
        .filter_map(|entry| parse_date(&entry.timestamp))
        .collect();

    let days_tracked = match (dates.iter().min(), dates.iter().max()) {
        (Some(first), Some(last)) => (*last - *first).num_days() + 1,
        _ => 0,
    };

    let mut per_day: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    for entry in entries {
        if let Some(date) = parse_date(&entry.timestamp) {
            let slot = per_day.entry(date).or_default();
            slot.0 += u32::from(entry.severity.level());
            slot.1 += 1;
        }
    }
    let daily_average = per_day
        .into_iter()
        .map(|(date, (sum, count))| DailyAveragePoint {
            date: date.to_string(),
            avg_level: f64::from(sum) / f64::from(count),
        })
        .collect();

    StatsSummary {
        total_entries,
        high_severity_pct,
        top_trigger: top_trigger.map(|(trigger, _)| trigger),
        days_tracked,
        severity_counts,
        trigger_counts,
        timeline,
        daily_average,
    }
}

fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MoodEntry, Severity};
    use std::collections::BTreeMap;

    fn entry(timestamp: &str, trigger: Trigger, severity: Severity) -> MoodEntry {
        MoodEntry {
            record_id: format!("id-{timestamp}"),
            user_id: "ana".to_string(),
            mood: "test mood".to_string(),
            primary_trigger: trigger,
            trigger_scores: BTreeMap::new(),
            severity,
            advice: String::new(),
            music_track: String::new(),
            deep_insight: String::new(),
            timestamp: timestamp.to_string(),
            private_note: None,
        }
    }

    #[test]
    fn empty_history_summarizes_to_zeroes() {
        let summary = build_summary(&[]);
        assert_eq!(summary.total_entries, 0);
        assert_eq!(summary.high_severity_pct, 0.0);
        assert_eq!(summary.top_trigger, None);
        assert_eq!(summary.days_tracked, 0);
        assert!(summary.trigger_counts.is_empty());
        assert!(summary.daily_average.is_empty());
    }

    #[test]
    fn severity_counts_and_high_pct() {
        let entries = vec![
            entry("2026-08-20T09:00:00.000000", Trigger::Work, Severity::High),
            entry("2026-08-21T09:00:00.000000", Trigger::Work, Severity::Low),
            entry("2026-08-22T09:00:00.000000", Trigger::Family, Severity::Low),
            entry("2026-08-23T09:00:00.000000", Trigger::Work, Severity::Medium),
        ];
        let summary = build_summary(&entries);
        assert_eq!(summary.severity_counts.low, 2);
        assert_eq!(summary.severity_counts.medium, 1);
        assert_eq!(summary.severity_counts.high, 1);
        assert_eq!(summary.high_severity_pct, 25.0);
    }

    #[test]
    fn top_trigger_is_the_mode_with_ties_to_first_seen() {
        let entries = vec![
            entry("2026-08-20T09:00:00.000000", Trigger::Family, Severity::Low),
            entry("2026-08-21T09:00:00.000000", Trigger::Work, Severity::Low),
            entry("2026-08-22T09:00:00.000000", Trigger::Work, Severity::Low),
            entry("2026-08-23T09:00:00.000000", Trigger::Family, Severity::Low),
        ];
        let summary = build_summary(&entries);
        assert_eq!(summary.top_trigger, Some(Trigger::Family));
        assert_eq!(summary.trigger_counts.len(), 2);
        assert_eq!(summary.trigger_counts[0].count, 2);
    }

    #[test]
    fn days_tracked_spans_first_to_last_inclusive() {
        let entries = vec![
            entry("2026-08-20T09:00:00.000000", Trigger::Work, Severity::Low),
            entry("2026-08-24T21:30:00.000000", Trigger::Work, Severity::Low),
        ];
        let summary = build_summary(&entries);
        assert_eq!(summary.days_tracked, 5);
    }

    #[test]
    fn daily_average_means_severity_levels_per_day() {
        let entries = vec![
            entry("2026-08-20T09:00:00.000000", Trigger::Work, Severity::Low),
            entry("2026-08-20T18:00:00.000000", Trigger::Work, Severity::High),
            entry("2026-08-21T09:00:00.000000", Trigger::Work, Severity::Medium),
        ];
        let summary = build_summary(&entries);
        assert_eq!(summary.daily_average.len(), 2);
        assert_eq!(summary.daily_average[0].date, "2026-08-20");
        assert_eq!(summary.daily_average[0].avg_level, 2.0);
        assert_eq!(summary.daily_average[1].avg_level, 2.0);
    }

    #[test]
    fn timeline_has_one_point_per_entry() {
        let entries = vec![
            entry("2026-08-20T09:00:00.000000", Trigger::Social, Severity::High),
            entry("2026-08-21T09:00:00.000000", Trigger::Work, Severity::Low),
        ];
        let summary = build_summary(&entries);
        assert_eq!(summary.timeline.len(), 2);
        assert_eq!(summary.timeline[0].level, 3);
        assert_eq!(summary.timeline[1].level, 1);
    }
}
