use axum::{extract::State, routing::get, Router};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    error::AppError,
    extract::{Json, Path},
    foods::repo_types::{FoodEntry, FoodList},
    state::AppState,
    suggestions::handlers::get_suggested_foods,
};

use super::dto::{CreateFoodRequest, FoodDto, FoodListResponse};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(list_foods).post(create_food))
        .route("/foods/:food_id", get(get_food))
        .route("/foods/suggested/:meal_type", get(get_suggested_foods))
}

/// POST /foods: adds the food to the user's list, replacing one with the same id.
#[instrument(skip(state, body))]
pub async fn create_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateFoodRequest>,
) -> Result<Json<FoodDto>, AppError> {
    let mut list = state
        .foods
        .find(&user_id)
        .await?
        .unwrap_or_else(|| FoodList::empty(user_id.clone()));

    let food = FoodEntry::from(body);
    list.upsert(food.clone());
    state.foods.save(&list).await?;

    info!(%user_id, food_id = %food.food_id, "food saved");
    Ok(Json(food.into()))
}

#[instrument(skip(state))]
pub async fn list_foods(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<FoodListResponse>, AppError> {
    let foods = state
        .foods
        .find(&user_id)
        .await?
        .map(|l| l.foods)
        .unwrap_or_default();
    Ok(Json(FoodListResponse {
        foods: foods.into_iter().map(FoodDto::from).collect(),
    }))
}

#[instrument(skip(state))]
pub async fn get_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(food_id): Path<String>,
) -> Result<Json<FoodDto>, AppError> {
    let list = state.foods.find(&user_id).await?;
    list.as_ref()
        .and_then(|l| l.find(&food_id))
        .cloned()
        .map(|f| Json(f.into()))
        .ok_or_else(|| AppError::NotFound("Food not found".into()))
}
