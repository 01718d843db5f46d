use serde::{Deserialize, Serialize};

use crate::foods::repo_types::FoodEntry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodDto {
    pub food_id: String,
    pub name: String,
    pub thumbnail: String,
}

impl From<FoodEntry> for FoodDto {
    fn from(f: FoodEntry) -> Self {
        Self {
            food_id: f.food_id,
            name: f.name,
            thumbnail: f.thumbnail,
        }
    }
}

impl From<FoodDto> for FoodEntry {
    fn from(d: FoodDto) -> Self {
        FoodEntry::new(d.food_id, d.name, d.thumbnail)
    }
}

/// Body of POST /foods. Clients send `id`; `food_id` is accepted too.
#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    #[serde(alias = "food_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl From<CreateFoodRequest> for FoodEntry {
    fn from(r: CreateFoodRequest) -> Self {
        FoodEntry::new(r.id, r.name, r.thumbnail)
    }
}

#[derive(Debug, Serialize)]
pub struct FoodListResponse {
    pub foods: Vec<FoodDto>,
}
