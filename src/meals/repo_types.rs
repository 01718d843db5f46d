use sqlx::{types::Json, FromRow};
use time::OffsetDateTime;

use crate::foods::repo_types::FoodEntry;

/// A logged meal. Identified by `(user_id, date_time)`.
#[derive(Debug, Clone)]
pub struct MealRecord {
    pub user_id: String,
    pub meal_type: String,
    pub date_time: OffsetDateTime,
    pub foods: Vec<FoodEntry>,
}

#[derive(Debug, FromRow)]
pub struct MealRow {
    pub user_id: String,
    pub meal_type: String,
    pub date_time: OffsetDateTime,
    pub foods: Json<Vec<FoodEntry>>,
}

impl From<MealRow> for MealRecord {
    fn from(r: MealRow) -> Self {
        Self {
            user_id: r.user_id,
            meal_type: r.meal_type,
            date_time: r.date_time,
            foods: r.foods.0,
        }
    }
}
