use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    error::AppError,
    extract::{Json, Query},
    state::AppState,
    window::TimeWindow,
};

use super::dto::{CreateMealRequest, HistoryQuery, MealResponse, UpdateMealRequest};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/meals/history", get(meal_history))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/meals", post(save_meal).put(update_meal))
}

// --- handlers ---

#[instrument(skip(state, body))]
pub async fn save_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateMealRequest>,
) -> Result<Json<MealResponse>, AppError> {
    let meal = body.into_record(user_id);
    state.meals.save(&meal).await?;
    info!(user_id = %meal.user_id, date_time = %meal.date_time, "meal saved");
    Ok(Json(meal.into()))
}

/// PUT /meals: moves the meal logged at `original_date_time` to the new values.
#[instrument(skip(state, body))]
pub async fn update_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<UpdateMealRequest>,
) -> Result<Json<MealResponse>, AppError> {
    let (original, meal) = body.split(user_id);
    if !state.meals.replace(original, &meal).await? {
        return Err(AppError::NotFound("Meal not found".into()));
    }
    info!(user_id = %meal.user_id, %original, date_time = %meal.date_time, "meal updated");
    Ok(Json(meal.into()))
}

#[instrument(skip(state))]
pub async fn meal_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<HistoryQuery>,
) -> Result<Json<Vec<MealResponse>>, AppError> {
    let window = TimeWindow::history(state.clock.now(), q.days, q.offset)?;
    let mut meals = state.meals.query(&user_id, window).await?;
    meals.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    Ok(Json(meals.into_iter().map(MealResponse::from).collect()))
}
