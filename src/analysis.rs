use crate::classify::classify;
use crate::content::generate;
use crate::models::{MoodEntry, Severity};
use chrono::Local;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::debug;

const REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Analyze a mood text, preferring a remote analyzer when one is configured.
/// Any remote failure (network, non-200, bad body) silently falls back to the
/// local classifier; the caller cannot tell which path produced the entry.
pub async fn analyze(
    client: &reqwest::Client,
    remote_url: Option<&str>,
    user_id: &str,
    mood: &str,
    severity: Option<Severity>,
    private_note: Option<String>,
) -> MoodEntry {
    if let Some(url) = remote_url {
        match remote_analyze(client, url, user_id, mood, severity).await {
            Ok(mut entry) => {
                entry.private_note = private_note;
                return entry;
            }
            Err(err) => debug!("remote analyzer unavailable, falling back to local: {err}"),
        }
    }

    build_entry(user_id, mood, severity, private_note)
}

async fn remote_analyze(
    client: &reqwest::Client,
    url: &str,
    user_id: &str,
    mood: &str,
    severity: Option<Severity>,
) -> Result<MoodEntry, reqwest::Error> {
    let response = client
        .post(url)
        .timeout(REMOTE_TIMEOUT)
        .json(&serde_json::json!({
            "user_id": user_id,
            "mood": mood,
            "severity": severity,
        }))
        .send()
        .await?
        .error_for_status()?;

    response.json::<MoodEntry>().await
}

/// Build a complete entry locally: classify, generate content, stamp the id
/// and timestamp. Does not persist.
pub fn build_entry(
    user_id: &str,
    mood: &str,
    severity: Option<Severity>,
    private_note: Option<String>,
) -> MoodEntry {
    let classification = classify(mood, severity);
    let content = generate(classification.primary_trigger, classification.severity, mood);
    let timestamp = Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();

    MoodEntry {
        record_id: record_id(user_id, &timestamp),
        user_id: user_id.to_string(),
        mood: mood.to_string(),
        primary_trigger: classification.primary_trigger,
        trigger_scores: classification.trigger_scores,
        severity: classification.severity,
        advice: content.advice,
        music_track: content.music_track,
        deep_insight: content.deep_insight,
        timestamp,
        private_note,
    }
}

/// Short opaque id: sha256 of user id + timestamp, truncated to 12 hex chars.
fn record_id(user_id: &str, timestamp: &str) -> String {
    let digest = Sha256::digest(format!("{user_id}{timestamp}").as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(12);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Trigger;

    #[test]
    fn entry_carries_classification_and_content() {
        let entry = build_entry("ana", "I am stressed about my exam tomorrow", None, None);
        assert_eq!(entry.user_id, "ana");
        assert_eq!(entry.primary_trigger, Trigger::Academic);
        assert_eq!(entry.severity, Severity::Medium);
        assert!(entry.advice.starts_with("STRESS MANAGEMENT:"));
        assert!(!entry.music_track.is_empty());
        assert!(!entry.deep_insight.is_empty());
        assert!(entry.private_note.is_none());
    }

    #[test]
    fn record_id_is_twelve_hex_chars() {
        let entry = build_entry("ana", "a quiet and uneventful day", None, None);
        assert_eq!(entry.record_id.len(), 12);
        assert!(entry.record_id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn record_id_depends_on_user_and_timestamp() {
        let a = record_id("ana", "2026-08-25T10:00:00.000001");
        let b = record_id("ben", "2026-08-25T10:00:00.000001");
        let c = record_id("ana", "2026-08-25T10:00:00.000002");
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn explicit_severity_is_kept() {
        let entry = build_entry("ana", "a quiet and uneventful day", Some(Severity::High), None);
        assert_eq!(entry.severity, Severity::High);
        assert!(entry.advice.starts_with("IMMEDIATE SUPPORT NEEDED:"));
    }

    #[test]
    fn private_note_is_attached_unanalyzed() {
        let entry = build_entry(
            "ana",
            "a quiet and uneventful day",
            None,
            Some("crisis plans for the surprise party".to_string()),
        );
        // The note mentions "crisis" but must not affect severity.
        assert_eq!(entry.severity, Severity::Low);
        assert_eq!(
            entry.private_note.as_deref(),
            Some("crisis plans for the surprise party")
        );
    }

    #[tokio::test]
    async fn analyze_without_remote_builds_locally() {
        let client = reqwest::Client::new();
        let entry = analyze(&client, None, "ana", "worried about money and bills", None, None).await;
        assert_eq!(entry.primary_trigger, Trigger::Financial);
        assert_eq!(entry.severity, Severity::Medium);
    }

    #[tokio::test]
    async fn analyze_falls_back_when_remote_is_unreachable() {
        let client = reqwest::Client::new();
        let entry = analyze(
            &client,
            Some("http://127.0.0.1:1/api/analyze"),
            "ana",
            "worried about money and bills",
            None,
            None,
        )
        .await;
        assert_eq!(entry.primary_trigger, Trigger::Financial);
    }
}
