//! In-memory stores used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::error::StoreError;
use crate::foods::{repo::FoodStore, repo_types::FoodList};
use crate::meals::{repo::MealStore, repo_types::MealRecord};
use crate::preferences::{repo::PreferencesStore, repo_types::Preferences};
use crate::symptoms::{repo::SymptomStore, repo_types::SymptomsEntry};
use crate::window::TimeWindow;

#[derive(Default)]
pub struct MemoryStore {
    meals: Mutex<Vec<MealRecord>>,
    foods: Mutex<HashMap<String, FoodList>>,
    preferences: Mutex<HashMap<String, Preferences>>,
    symptoms: Mutex<Vec<SymptomsEntry>>,
}

impl MemoryStore {
    pub fn meal_count(&self) -> usize {
        self.meals.lock().unwrap().len()
    }
}

#[async_trait]
impl MealStore for MemoryStore {
    async fn query(&self, user_id: &str, window: TimeWindow) -> Result<Vec<MealRecord>, StoreError> {
        let meals = self.meals.lock().unwrap();
        // reversed so callers cannot rely on insertion order
        Ok(meals
            .iter()
            .rev()
            .filter(|m| m.user_id == user_id && window.contains(m.date_time))
            .cloned()
            .collect())
    }

    async fn save(&self, meal: &MealRecord) -> Result<(), StoreError> {
        let mut meals = self.meals.lock().unwrap();
        meals.retain(|m| !(m.user_id == meal.user_id && m.date_time == meal.date_time));
        meals.push(meal.clone());
        Ok(())
    }

    async fn replace(&self, original: OffsetDateTime, meal: &MealRecord) -> Result<bool, StoreError> {
        let mut meals = self.meals.lock().unwrap();
        let before = meals.len();
        meals.retain(|m| !(m.user_id == meal.user_id && m.date_time == original));
        if meals.len() == before {
            return Ok(false);
        }
        meals.retain(|m| !(m.user_id == meal.user_id && m.date_time == meal.date_time));
        meals.push(meal.clone());
        Ok(true)
    }
}

#[async_trait]
impl FoodStore for MemoryStore {
    async fn find(&self, user_id: &str) -> Result<Option<FoodList>, StoreError> {
        Ok(self.foods.lock().unwrap().get(user_id).cloned())
    }

    async fn save(&self, list: &FoodList) -> Result<(), StoreError> {
        self.foods
            .lock()
            .unwrap()
            .insert(list.user_id.clone(), list.clone());
        Ok(())
    }
}

#[async_trait]
impl PreferencesStore for MemoryStore {
    async fn find(&self, user_id: &str) -> Result<Option<Preferences>, StoreError> {
        Ok(self.preferences.lock().unwrap().get(user_id).cloned())
    }

    async fn save(&self, prefs: &Preferences) -> Result<(), StoreError> {
        self.preferences
            .lock()
            .unwrap()
            .insert(prefs.user_id.clone(), prefs.clone());
        Ok(())
    }
}

#[async_trait]
impl SymptomStore for MemoryStore {
    async fn query(&self, user_id: &str, window: TimeWindow) -> Result<Vec<SymptomsEntry>, StoreError> {
        Ok(self
            .symptoms
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id && window.contains(e.date_time))
            .cloned()
            .collect())
    }

    async fn save(&self, entry: &SymptomsEntry) -> Result<(), StoreError> {
        let mut symptoms = self.symptoms.lock().unwrap();
        symptoms.retain(|e| !(e.user_id == entry.user_id && e.date_time == entry.date_time));
        symptoms.push(entry.clone());
        Ok(())
    }
}
