use crate::models::MoodEntry;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub remote_url: Option<String>,
    pub client: reqwest::Client,
    pub entries: Arc<Mutex<Vec<MoodEntry>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, remote_url: Option<String>, entries: Vec<MoodEntry>) -> Self {
        Self {
            data_path,
            remote_url,
            client: reqwest::Client::new(),
            entries: Arc::new(Mutex::new(entries)),
        }
    }
}
