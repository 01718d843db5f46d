use async_trait::async_trait;
use sqlx::{types::Json, FromRow, PgPool};

use crate::error::StoreError;
use crate::foods::repo_types::{FoodEntry, FoodList};

#[async_trait]
pub trait FoodStore: Send + Sync {
    async fn find(&self, user_id: &str) -> Result<Option<FoodList>, StoreError>;
    async fn save(&self, list: &FoodList) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgFoodStore {
    db: PgPool,
}

impl PgFoodStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(FromRow)]
struct FoodListRow {
    user_id: String,
    foods: Json<Vec<FoodEntry>>,
}

#[async_trait]
impl FoodStore for PgFoodStore {
    async fn find(&self, user_id: &str) -> Result<Option<FoodList>, StoreError> {
        let row = sqlx::query_as::<_, FoodListRow>(
            r#"
            SELECT user_id, foods
            FROM food_lists
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(|r| FoodList {
            user_id: r.user_id,
            foods: r.foods.0,
        }))
    }

    async fn save(&self, list: &FoodList) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO food_lists (user_id, foods)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET foods = EXCLUDED.foods
            "#,
        )
        .bind(&list.user_id)
        .bind(Json(&list.foods))
        .execute(&self.db)
        .await?;
        Ok(())
    }
}
