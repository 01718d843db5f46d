use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::foods::{dto::FoodDto, repo_types::FoodEntry};
use crate::meals::repo_types::MealRecord;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealResponse {
    pub meal_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    pub foods: Vec<FoodDto>,
}

impl From<MealRecord> for MealResponse {
    fn from(m: MealRecord) -> Self {
        Self {
            meal_type: m.meal_type,
            date_time: m.date_time,
            foods: m.foods.into_iter().map(FoodDto::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub meal_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    #[serde(default)]
    pub foods: Vec<FoodDto>,
}

impl CreateMealRequest {
    pub fn into_record(self, user_id: String) -> MealRecord {
        MealRecord {
            user_id,
            meal_type: self.meal_type,
            date_time: self.date_time.to_offset(time::UtcOffset::UTC),
            foods: self.foods.into_iter().map(FoodEntry::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateMealRequest {
    pub meal_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    #[serde(default)]
    pub foods: Vec<FoodDto>,
    #[serde(with = "time::serde::rfc3339")]
    pub original_date_time: OffsetDateTime,
}

impl UpdateMealRequest {
    pub fn split(self, user_id: String) -> (OffsetDateTime, MealRecord) {
        let original = self.original_date_time.to_offset(time::UtcOffset::UTC);
        let meal = CreateMealRequest {
            meal_type: self.meal_type,
            date_time: self.date_time,
            foods: self.foods,
        }
        .into_record(user_id);
        (original, meal)
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_days")]
    pub days: i64,
    #[serde(default)]
    pub offset: i64,
}
fn default_days() -> i64 { 3 }
