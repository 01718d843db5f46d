use serde::{Deserialize, Serialize};

use crate::preferences::repo_types::Preferences;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesDto {
    pub default_meal_times: Vec<String>,
    pub use_thumbnails: bool,
}

impl From<Preferences> for PreferencesDto {
    fn from(p: Preferences) -> Self {
        Self {
            default_meal_times: p.default_meal_times,
            use_thumbnails: p.use_thumbnails,
        }
    }
}
