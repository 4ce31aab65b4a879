use crate::models::{Severity, Trigger};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Classification {
    pub primary_trigger: Trigger,
    pub trigger_scores: BTreeMap<Trigger, u32>,
    pub severity: Severity,
}

// One point per keyword found as a case-insensitive substring, not per
// occurrence. Table order follows the Trigger enum.
const KEYWORDS: [(Trigger, &[&str]); 9] = [
    (
        Trigger::Political,
        &["election", "politics", "government", "vote", "policy", "politician"],
    ),
    (
        Trigger::Work,
        &["job", "boss", "deadline", "work", "career", "office", "colleague"],
    ),
    (
        Trigger::Health,
        &["sick", "pain", "anxiety", "depression", "mental", "physical"],
    ),
    (
        Trigger::Relationship,
        &["partner", "breakup", "marriage", "dating", "spouse", "divorce"],
    ),
    (
        Trigger::Financial,
        &["money", "debt", "bills", "salary", "budget", "expensive"],
    ),
    (
        Trigger::Academic,
        &["exam", "school", "study", "grade", "homework", "test"],
    ),
    (
        Trigger::Family,
        &["family", "parent", "mother", "father", "sibling", "child"],
    ),
    (
        Trigger::Social,
        &["friend", "lonely", "isolated", "people", "community"],
    ),
    (
        Trigger::Environmental,
        &["climate", "environment", "pollution", "nature", "weather"],
    ),
];

const HIGH_WORDS: &[&str] = &[
    "crisis",
    "hopeless",
    "unbearable",
    "suicide",
    "kill",
    "can't take",
    "overwhelming",
];

const MEDIUM_WORDS: &[&str] = &[
    "stressed",
    "anxious",
    "worried",
    "upset",
    "struggling",
    "difficult",
];

/// Scores every category against the text and resolves severity. Total
/// function: empty or keyword-free text yields all-zero scores, `Other`, and
/// low severity. An explicit severity always wins over auto-detection.
pub fn classify(text: &str, severity: Option<Severity>) -> Classification {
    let lower = text.to_lowercase();

    let mut trigger_scores = BTreeMap::new();
    let mut primary_trigger = Trigger::Other;
    let mut best = 0u32;
    for (trigger, keywords) in KEYWORDS {
        let score = keywords.iter().filter(|kw| lower.contains(*kw)).count() as u32;
        // Strictly greater keeps the first category on ties.
        if score > best {
            best = score;
            primary_trigger = trigger;
        }
        trigger_scores.insert(trigger, score);
    }

    Classification {
        primary_trigger,
        trigger_scores,
        severity: severity.unwrap_or_else(|| detect_severity(&lower)),
    }
}

fn detect_severity(lower: &str) -> Severity {
    if HIGH_WORDS.iter().any(|word| lower.contains(word)) {
        Severity::High
    } else if MEDIUM_WORDS.iter().any(|word| lower.contains(word)) {
        Severity::Medium
    } else {
        Severity::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_category_keywords_pick_that_category() {
        let result = classify("my boss moved the deadline again", None);
        assert_eq!(result.primary_trigger, Trigger::Work);
        assert!(result.trigger_scores[&Trigger::Work] >= 1);
    }

    #[test]
    fn keyword_free_text_is_other_with_zero_scores() {
        let result = classify("a perfectly ordinary morning", None);
        assert_eq!(result.primary_trigger, Trigger::Other);
        assert!(result.trigger_scores.values().all(|&score| score == 0));
    }

    #[test]
    fn empty_text_is_other_and_low() {
        let result = classify("   ", None);
        assert_eq!(result.primary_trigger, Trigger::Other);
        assert_eq!(result.severity, Severity::Low);
        assert!(result.trigger_scores.values().all(|&score| score == 0));
    }

    #[test]
    fn high_keyword_beats_medium_keyword() {
        let result = classify("I feel stressed and everything is hopeless", None);
        assert_eq!(result.severity, Severity::High);
    }

    #[test]
    fn explicit_severity_overrides_detection() {
        let result = classify("this is a crisis", Some(Severity::Low));
        assert_eq!(result.severity, Severity::Low);
    }

    #[test]
    fn score_ties_break_to_earlier_category() {
        // One work keyword and one health keyword; work comes first.
        let result = classify("my job gives me pain", None);
        assert_eq!(result.trigger_scores[&Trigger::Work], 1);
        assert_eq!(result.trigger_scores[&Trigger::Health], 1);
        assert_eq!(result.primary_trigger, Trigger::Work);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = classify("The ELECTION coverage is exhausting", None);
        assert_eq!(result.primary_trigger, Trigger::Political);
    }

    #[test]
    fn exam_text_detects_academic_and_medium() {
        let result = classify("I am stressed about my exam tomorrow", None);
        assert_eq!(result.primary_trigger, Trigger::Academic);
        assert_eq!(result.trigger_scores[&Trigger::Academic], 1);
        assert_eq!(result.severity, Severity::Medium);
    }

    #[test]
    fn hopeless_text_is_high_with_no_trigger() {
        let result = classify("I feel hopeless and can't take this anymore", None);
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.primary_trigger, Trigger::Other);
        assert!(result.trigger_scores.values().all(|&score| score == 0));
    }

    #[test]
    fn multiple_keywords_accumulate() {
        let result = classify("work deadline from my boss at the office", None);
        assert_eq!(result.trigger_scores[&Trigger::Work], 4);
        assert_eq!(result.primary_trigger, Trigger::Work);
    }
}
