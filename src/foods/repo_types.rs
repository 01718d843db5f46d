use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A food as it appears in a user's food list or inside a meal.
///
/// Two entries are the same food iff their `food_id` matches; `name` and
/// `thumbnail` do not take part in equality or hashing. Within one merge the
/// entry that is kept decides which name/thumbnail survive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub food_id: String,
    pub name: String,
    pub thumbnail: String,
}

impl FoodEntry {
    pub fn new(food_id: impl Into<String>, name: impl Into<String>, thumbnail: impl Into<String>) -> Self {
        Self {
            food_id: food_id.into(),
            name: name.into(),
            thumbnail: thumbnail.into(),
        }
    }
}

impl PartialEq for FoodEntry {
    fn eq(&self, other: &Self) -> bool {
        self.food_id == other.food_id
    }
}

impl Eq for FoodEntry {}

impl Hash for FoodEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.food_id.hash(state);
    }
}

/// The per-user catalogue of known foods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodList {
    pub user_id: String,
    pub foods: Vec<FoodEntry>,
}

impl FoodList {
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            foods: Vec::new(),
        }
    }

    /// Replaces any entry with the same id and appends `food` at the end.
    pub fn upsert(&mut self, food: FoodEntry) {
        self.foods.retain(|f| f.food_id != food.food_id);
        self.foods.push(food);
    }

    pub fn find(&self, food_id: &str) -> Option<&FoodEntry> {
        self.foods.iter().find(|f| f.food_id == food_id)
    }
}
