use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Closed set of trigger categories. Enum order is the tie-break order for
/// classification, so new categories belong at the end (before `Other`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Political,
    Work,
    Health,
    Relationship,
    Financial,
    Academic,
    Family,
    Social,
    Environmental,
    Other,
}

impl Trigger {
    pub fn label(self) -> &'static str {
        match self {
            Trigger::Political => "political",
            Trigger::Work => "work",
            Trigger::Health => "health",
            Trigger::Relationship => "relationship",
            Trigger::Financial => "financial",
            Trigger::Academic => "academic",
            Trigger::Family => "family",
            Trigger::Social => "social",
            Trigger::Environmental => "environmental",
            Trigger::Other => "other",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Numeric level used by the timeline and trend charts.
    pub fn level(self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One persisted mood-analysis result. Immutable after creation; the only
/// mutations a store performs are deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub record_id: String,
    pub user_id: String,
    pub mood: String,
    pub primary_trigger: Trigger,
    pub trigger_scores: BTreeMap<Trigger, u32>,
    pub severity: Severity,
    pub advice: String,
    pub music_track: String,
    pub deep_insight: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub user_id: String,
    pub mood: String,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub private_note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub removed: usize,
}

#[derive(Debug, Serialize, Default)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Serialize)]
pub struct TriggerCount {
    pub trigger: Trigger,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct TimelinePoint {
    pub timestamp: String,
    pub trigger: Trigger,
    pub severity: Severity,
    pub level: u8,
}

#[derive(Debug, Serialize)]
pub struct DailyAveragePoint {
    pub date: String,
    pub avg_level: f64,
}

#[derive(Debug, Serialize)]
pub struct StatsSummary {
    pub total_entries: usize,
    pub high_severity_pct: f64,
    pub top_trigger: Option<Trigger>,
    pub days_tracked: i64,
    pub severity_counts: SeverityCounts,
    pub trigger_counts: Vec<TriggerCount>,
    pub timeline: Vec<TimelinePoint>,
    pub daily_average: Vec<DailyAveragePoint>,
}
