use crate::calendar::{build_calendar, entries_for_date};
use crate::classify::entry_kind;
use crate::dates::{canonical_date, date_key};
use crate::errors::AppError;
use crate::gratitude::gratitude_notes;
use crate::models::{CalendarCell, GratitudeNote, JournalEntry, NewEntryRequest, StatsResponse};
use crate::state::AppState;
use crate::stats::compute_stats;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{Datelike, Local, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: String,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let stats = compute_stats(&data.entries, &data.goals);
    Html(render_index(&stats))
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<JournalEntry>> {
    let data = state.data.lock().await;
    Json(data.entries.clone())
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryRequest>,
) -> Result<Json<JournalEntry>, AppError> {
    if payload.content.trim().is_empty() {
        return Err(AppError::bad_request("content must not be empty"));
    }

    let mut data = state.data.lock().await;
    let id = data.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;

    let mut entry = JournalEntry {
        id,
        entry_date: None,
        date: Some(
            payload
                .date
                .unwrap_or_else(|| Local::now().date_naive().to_string()),
        ),
        mood: payload.mood,
        content: payload.content,
        created_at: Some(Utc::now().to_rfc3339()),
        kind: payload.kind,
    };
    // The discriminator is authoritative from here on; derive it once from
    // the legacy content marker when the client did not send one.
    entry.kind = Some(entry_kind(&entry));

    data.entries.push(entry.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(entry))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<BTreeMap<String, CalendarCell>>, AppError> {
    let today = Local::now().date_naive();
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month());
    if !(1..=12).contains(&month) {
        return Err(AppError::bad_request("month must be between 1 and 12"));
    }

    let data = state.data.lock().await;
    Ok(Json(build_calendar(&data.entries, year, month)))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    let Some(date) = canonical_date(&query.date) else {
        return Err(AppError::bad_request("date must be YYYY-MM-DD"));
    };
    if date_key(date) != query.date {
        return Err(AppError::bad_request("date must be YYYY-MM-DD"));
    }

    let data = state.data.lock().await;
    Ok(Json(entries_for_date(&data.entries, date)))
}

pub async fn get_gratitude(State(state): State<AppState>) -> Json<Vec<GratitudeNote>> {
    let data = state.data.lock().await;
    Json(gratitude_notes(&data.entries))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let data = state.data.lock().await;
    Json(compute_stats(&data.entries, &data.goals))
}
