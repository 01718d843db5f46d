use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::preferences::repo_types::Preferences;

#[async_trait]
pub trait PreferencesStore: Send + Sync {
    async fn find(&self, user_id: &str) -> Result<Option<Preferences>, StoreError>;
    async fn save(&self, prefs: &Preferences) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgPreferencesStore {
    db: PgPool,
}

impl PgPreferencesStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PreferencesStore for PgPreferencesStore {
    async fn find(&self, user_id: &str) -> Result<Option<Preferences>, StoreError> {
        let prefs = sqlx::query_as::<_, Preferences>(
            r#"
            SELECT user_id, default_meal_times, use_thumbnails
            FROM preferences
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(prefs)
    }

    async fn save(&self, prefs: &Preferences) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO preferences (user_id, default_meal_times, use_thumbnails)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE
            SET default_meal_times = EXCLUDED.default_meal_times,
                use_thumbnails = EXCLUDED.use_thumbnails
            "#,
        )
        .bind(&prefs.user_id)
        .bind(&prefs.default_meal_times)
        .bind(prefs.use_thumbnails)
        .execute(&self.db)
        .await?;
        Ok(())
    }
}
