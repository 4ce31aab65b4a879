use crate::errors::AppError;
use crate::models::MoodEntry;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("MINDMATE_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/entries.json"))
}

/// The data file is a bare JSON array of entries. A missing file is a fresh
/// store; read or parse failures are logged and degrade to an empty store.
pub async fn load_entries(path: &Path) -> Vec<MoodEntry> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse data file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            Vec::new()
        }
    }
}

/// Full rewrite on every save; no incremental append and no file locking.
pub async fn persist_entries(path: &Path, entries: &[MoodEntry]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(entries).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::build_entry;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("mindmate_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let entries = load_entries(Path::new("/nonexistent/mindmate.json")).await;
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{not json").await.unwrap();
        let entries = load_entries(&path).await;
        assert!(entries.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn entries_round_trip_through_the_file() {
        let path = temp_path("roundtrip");
        let saved = vec![
            build_entry("ana", "worried about money and bills", None, None),
            build_entry("ben", "lonely without my friend group", None, Some("note".into())),
        ];

        persist_entries(&path, &saved).await.unwrap();
        let loaded = load_entries(&path).await;

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].record_id, saved[0].record_id);
        assert_eq!(loaded[0].primary_trigger, saved[0].primary_trigger);
        assert_eq!(loaded[1].private_note.as_deref(), Some("note"));
        let _ = fs::remove_file(&path).await;
    }
}
