use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use time::OffsetDateTime;

use crate::error::StoreError;
use crate::meals::repo_types::{MealRecord, MealRow};
use crate::window::TimeWindow;

#[async_trait]
pub trait MealStore: Send + Sync {
    /// All meals of `user_id` with `date_time` inside `window`, in no particular order.
    async fn query(&self, user_id: &str, window: TimeWindow) -> Result<Vec<MealRecord>, StoreError>;

    /// Inserts or overwrites the meal at `(user_id, date_time)`.
    async fn save(&self, meal: &MealRecord) -> Result<(), StoreError>;

    /// Moves the meal stored at `original` to `meal`. Returns false when nothing was stored at `original`.
    async fn replace(
        &self,
        original: OffsetDateTime,
        meal: &MealRecord,
    ) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct PgMealStore {
    db: PgPool,
}

impl PgMealStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MealStore for PgMealStore {
    async fn query(&self, user_id: &str, window: TimeWindow) -> Result<Vec<MealRecord>, StoreError> {
        let rows = sqlx::query_as::<_, MealRow>(
            r#"
            SELECT user_id, meal_type, date_time, foods
            FROM meals
            WHERE user_id = $1 AND date_time >= $2 AND date_time < $3
            "#,
        )
        .bind(user_id)
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.db)
        .await?;
        Ok(rows.into_iter().map(MealRecord::from).collect())
    }

    async fn save(&self, meal: &MealRecord) -> Result<(), StoreError> {
        upsert(&self.db, meal).await
    }

    async fn replace(
        &self,
        original: OffsetDateTime,
        meal: &MealRecord,
    ) -> Result<bool, StoreError> {
        let mut tx = self.db.begin().await?;

        let deleted = sqlx::query(
            r#"
            DELETE FROM meals
            WHERE user_id = $1 AND date_time = $2
            "#,
        )
        .bind(&meal.user_id)
        .bind(original)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        upsert(&mut *tx, meal).await?;
        tx.commit().await?;
        Ok(true)
    }
}

async fn upsert<'e, E>(executor: E, meal: &MealRecord) -> Result<(), StoreError>
where
    E: sqlx::Executor<'e, Database = sqlx::Postgres>,
{
    sqlx::query(
        r#"
        INSERT INTO meals (user_id, date_time, meal_type, foods)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, date_time)
        DO UPDATE SET meal_type = EXCLUDED.meal_type, foods = EXCLUDED.foods
        "#,
    )
    .bind(&meal.user_id)
    .bind(meal.date_time)
    .bind(&meal.meal_type)
    .bind(Json(&meal.foods))
    .execute(executor)
    .await?;
    Ok(())
}
