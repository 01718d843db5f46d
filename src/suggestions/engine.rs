use std::collections::HashSet;
use std::sync::Arc;

use jiff::tz::TimeZone;
use time::Duration;
use tracing::{debug, instrument};

use crate::clock::Clock;
use crate::config::SuggestionConfig;
use crate::foods::repo_types::FoodEntry;
use crate::meals::{repo::MealStore, repo_types::MealRecord};
use crate::window::{self, TimeWindow, WindowError};

use super::frequency::aggregate;
use super::SuggestionError;

#[derive(Debug, Clone)]
pub struct SuggestionSettings {
    /// Zone whose calendar day defines "yesterday".
    pub timezone: TimeZone,
    pub lookback: Duration,
    pub recent_meals: usize,
    pub frequency_threshold: f64,
}

/// Roughly a century.
const MAX_LOOKBACK_DAYS: i64 = 36_500;

impl SuggestionSettings {
    pub fn from_config(cfg: &SuggestionConfig) -> Result<Self, WindowError> {
        if !(1..=MAX_LOOKBACK_DAYS).contains(&cfg.lookback_days) {
            return Err(WindowError::OutOfRange("lookback"));
        }
        Ok(Self {
            timezone: window::zone(&cfg.timezone)?,
            lookback: window::checked_days(cfg.lookback_days, "lookback")?,
            recent_meals: cfg.recent_meals,
            frequency_threshold: cfg.frequency_threshold,
        })
    }
}

/// Suggests foods for a meal from two rules over the user's history:
/// what they had for the same meal type yesterday, and what shows up in
/// most of their recent meals.
#[derive(Clone)]
pub struct SuggestionEngine {
    meals: Arc<dyn MealStore>,
    clock: Arc<dyn Clock>,
    settings: SuggestionSettings,
}

impl SuggestionEngine {
    pub fn new(meals: Arc<dyn MealStore>, clock: Arc<dyn Clock>, settings: SuggestionSettings) -> Self {
        Self {
            meals,
            clock,
            settings,
        }
    }

    #[instrument(skip(self))]
    pub async fn suggested_foods(
        &self,
        user_id: &str,
        meal_type: &str,
    ) -> Result<HashSet<FoodEntry>, SuggestionError> {
        let now = self.clock.now();
        let yesterday = TimeWindow::yesterday(now, &self.settings.timezone)?;
        let recent = TimeWindow::trailing(now, self.settings.lookback)?;

        let (yesterday_meals, recent_meals) = tokio::try_join!(
            self.meals.query(user_id, yesterday),
            self.meals.query(user_id, recent),
        )?;

        let mut suggested = yesterday_foods(&yesterday_meals, meal_type);
        let frequent = self.frequent_foods(recent_meals);
        debug!(
            yesterday = suggested.len(),
            frequent = frequent.len(),
            "suggestion rules evaluated"
        );

        // Entries already present (from yesterday) are kept as-is.
        suggested.extend(frequent);
        Ok(suggested)
    }

    fn frequent_foods(&self, mut meals: Vec<MealRecord>) -> HashSet<FoodEntry> {
        meals.sort_by(|a, b| b.date_time.cmp(&a.date_time));
        meals.truncate(self.settings.recent_meals);
        aggregate(&meals, self.settings.frequency_threshold)
    }
}

fn yesterday_foods(meals: &[MealRecord], meal_type: &str) -> HashSet<FoodEntry> {
    let mut foods = HashSet::new();
    for food in meals
        .iter()
        .filter(|m| m.meal_type == meal_type)
        .flat_map(|m| m.foods.iter())
    {
        // replace keeps the last occurrence of a repeated food id
        foods.replace(food.clone());
    }
    foods
}
