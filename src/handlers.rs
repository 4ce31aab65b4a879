use crate::analysis;
use crate::errors::AppError;
use crate::models::{AnalyzeRequest, ClearResponse, MoodEntry, StatsSummary, UserQuery};
use crate::state::AppState;
use crate::stats::build_summary;
use crate::storage::persist_entries;
use crate::ui;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<MoodEntry>, AppError> {
    let user_id = payload.user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::bad_request("user_id must not be empty"));
    }

    let mood = payload.mood.trim();
    if mood.is_empty() {
        return Err(AppError::bad_request("please describe your mood before analyzing"));
    }
    if mood.chars().count() < 10 {
        return Err(AppError::bad_request(
            "please provide more detail (at least 10 characters)",
        ));
    }

    let private_note = payload
        .private_note
        .as_deref()
        .map(str::trim)
        .filter(|note| !note.is_empty())
        .map(str::to_string);

    let entry = analysis::analyze(
        &state.client,
        state.remote_url.as_deref(),
        user_id,
        mood,
        payload.severity,
        private_note,
    )
    .await;

    let mut entries = state.entries.lock().await;
    entries.push(entry.clone());
    persist_entries(&state.data_path, &entries).await?;

    Ok(Json(entry))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<MoodEntry>>, AppError> {
    let entries = state.entries.lock().await;
    let user_entries = entries
        .iter()
        .filter(|entry| entry.user_id == query.user_id)
        .cloned()
        .collect();
    Ok(Json(user_entries))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<StatsSummary>, AppError> {
    let entries = state.entries.lock().await;
    let user_entries: Vec<MoodEntry> = entries
        .iter()
        .filter(|entry| entry.user_id == query.user_id)
        .cloned()
        .collect();
    Ok(Json(build_summary(&user_entries)))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut entries = state.entries.lock().await;
    let before = entries.len();
    entries.retain(|entry| entry.record_id != record_id);
    if entries.len() == before {
        return Err(AppError::not_found("no entry with that record id"));
    }

    persist_entries(&state.data_path, &entries).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<ClearResponse>, AppError> {
    let mut entries = state.entries.lock().await;
    let before = entries.len();
    entries.retain(|entry| entry.user_id != query.user_id);
    let removed = before - entries.len();

    if removed > 0 {
        persist_entries(&state.data_path, &entries).await?;
    }

    Ok(Json(ClearResponse { removed }))
}

pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.entries.lock().await;
    let user_entries: Vec<&MoodEntry> = entries
        .iter()
        .filter(|entry| entry.user_id == query.user_id)
        .collect();
    let payload = serde_json::to_vec_pretty(&user_entries).map_err(AppError::internal)?;

    let filename = format!(
        "mindmate_export_{}_{}.json",
        query.user_id,
        Local::now().format("%Y%m%d")
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        payload,
    ))
}
