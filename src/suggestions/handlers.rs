use axum::extract::State;
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    error::AppError,
    extract::{Json, Path},
    foods::dto::FoodDto,
    state::AppState,
};

/// GET /foods/suggested/:meal_type
#[instrument(skip(state))]
pub async fn get_suggested_foods(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(meal_type): Path<String>,
) -> Result<Json<Vec<FoodDto>>, AppError> {
    let suggested = state.suggestions.suggested_foods(&user_id, &meal_type).await?;

    let mut foods: Vec<FoodDto> = suggested.into_iter().map(FoodDto::from).collect();
    foods.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.food_id.cmp(&b.food_id)));
    Ok(Json(foods))
}
