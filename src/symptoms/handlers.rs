use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use time::UtcOffset;
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    error::AppError,
    extract::{Json, Query},
    meals::dto::HistoryQuery,
    state::AppState,
    symptoms::repo_types::SymptomsEntry,
    window::TimeWindow,
};

use super::dto::{CreateSymptomsRequest, SavedSymptoms, SymptomsHistoryItem};

pub fn symptom_routes() -> Router<AppState> {
    Router::new()
        .route("/symptoms", post(save_symptoms))
        .route("/symptoms/history", get(symptom_history))
}

#[instrument(skip(state, body))]
pub async fn save_symptoms(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateSymptomsRequest>,
) -> Result<Json<SavedSymptoms>, AppError> {
    let entry = SymptomsEntry {
        user_id,
        date_time: body.date_time.to_offset(UtcOffset::UTC),
        symptoms: body.symptoms,
    };
    state.symptoms.save(&entry).await?;
    Ok(Json(entry.into()))
}

#[instrument(skip(state))]
pub async fn symptom_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<HistoryQuery>,
) -> Result<Json<Vec<SymptomsHistoryItem>>, AppError> {
    let window = TimeWindow::history(state.clock.now(), q.days, q.offset)?;
    let mut entries = state.symptoms.query(&user_id, window).await?;
    entries.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    Ok(Json(entries.into_iter().map(SymptomsHistoryItem::from).collect()))
}
