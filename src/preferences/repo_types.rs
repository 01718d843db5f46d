use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Preferences {
    pub user_id: String,
    pub default_meal_times: Vec<String>,
    pub use_thumbnails: bool,
}

impl Preferences {
    /// What a user gets before they ever saved preferences.
    pub fn defaults(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            default_meal_times: vec!["9:00".into(), "12:00".into(), "18:00".into()],
            use_thumbnails: true,
        }
    }
}
