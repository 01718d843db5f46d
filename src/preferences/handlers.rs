use axum::{extract::State, routing::get, Router};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser, error::AppError, extract::Json,
    preferences::repo_types::Preferences, state::AppState,
};

use super::dto::PreferencesDto;

pub fn preferences_routes() -> Router<AppState> {
    Router::new().route("/preferences", get(get_preferences).post(update_preferences))
}

async fn load_or_default(state: &AppState, user_id: &str) -> Result<Preferences, AppError> {
    Ok(state
        .preferences
        .find(user_id)
        .await?
        .unwrap_or_else(|| Preferences::defaults(user_id)))
}

#[instrument(skip(state))]
pub async fn get_preferences(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PreferencesDto>, AppError> {
    let prefs = load_or_default(&state, &user_id).await?;
    Ok(Json(prefs.into()))
}

#[instrument(skip(state, body))]
pub async fn update_preferences(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<PreferencesDto>,
) -> Result<Json<PreferencesDto>, AppError> {
    let mut prefs = load_or_default(&state, &user_id).await?;
    prefs.default_meal_times = body.default_meal_times;
    prefs.use_thumbnails = body.use_thumbnails;
    state.preferences.save(&prefs).await?;
    Ok(Json(prefs.into()))
}
