use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct SymptomsEntry {
    pub user_id: String,
    pub date_time: OffsetDateTime,
    pub symptoms: Vec<String>,
}
