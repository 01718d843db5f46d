use std::collections::{HashMap, HashSet};

use crate::foods::repo_types::FoodEntry;
use crate::meals::repo_types::MealRecord;

/// Foods present in at least `fraction` of `meals`.
///
/// A food counts once per meal no matter how often it is listed in that meal.
/// The representative entry for a food is the last one seen while iterating.
/// `meals` is expected to be sorted newest first and already capped.
pub fn aggregate(meals: &[MealRecord], fraction: f64) -> HashSet<FoodEntry> {
    if meals.is_empty() {
        return HashSet::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut representatives: HashMap<&str, &FoodEntry> = HashMap::new();

    for meal in meals {
        let mut seen_in_meal: HashSet<&str> = HashSet::new();
        for food in &meal.foods {
            let id = food.food_id.as_str();
            representatives.insert(id, food);
            if seen_in_meal.insert(id) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
    }

    let threshold = fraction * meals.len() as f64;
    counts
        .into_iter()
        .filter(|(_, count)| *count as f64 >= threshold)
        .filter_map(|(id, _)| representatives.get(id).map(|f| (*f).clone()))
        .collect()
}
