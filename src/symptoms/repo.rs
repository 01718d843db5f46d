use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::symptoms::repo_types::SymptomsEntry;
use crate::window::TimeWindow;

#[async_trait]
pub trait SymptomStore: Send + Sync {
    async fn query(&self, user_id: &str, window: TimeWindow) -> Result<Vec<SymptomsEntry>, StoreError>;
    async fn save(&self, entry: &SymptomsEntry) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgSymptomStore {
    db: PgPool,
}

impl PgSymptomStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SymptomStore for PgSymptomStore {
    async fn query(&self, user_id: &str, window: TimeWindow) -> Result<Vec<SymptomsEntry>, StoreError> {
        let rows = sqlx::query_as::<_, SymptomsEntry>(
            r#"
            SELECT user_id, date_time, symptoms
            FROM symptoms
            WHERE user_id = $1 AND date_time >= $2 AND date_time < $3
            "#,
        )
        .bind(user_id)
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn save(&self, entry: &SymptomsEntry) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO symptoms (user_id, date_time, symptoms)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, date_time) DO UPDATE SET symptoms = EXCLUDED.symptoms
            "#,
        )
        .bind(&entry.user_id)
        .bind(entry.date_time)
        .bind(&entry.symptoms)
        .execute(&self.db)
        .await?;
        Ok(())
    }
}
