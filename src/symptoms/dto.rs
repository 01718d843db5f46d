use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::symptoms::repo_types::SymptomsEntry;

#[derive(Debug, Deserialize)]
pub struct CreateSymptomsRequest {
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// Echo of a saved entry, keyed `date_time`.
#[derive(Debug, Serialize)]
pub struct SavedSymptoms {
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    pub symptoms: Vec<String>,
}

impl From<SymptomsEntry> for SavedSymptoms {
    fn from(e: SymptomsEntry) -> Self {
        Self {
            date_time: e.date_time,
            symptoms: e.symptoms,
        }
    }
}

/// History rows are keyed `dateTime`, like meal history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomsHistoryItem {
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    pub symptoms: Vec<String>,
}

impl From<SymptomsEntry> for SymptomsHistoryItem {
    fn from(e: SymptomsEntry) -> Self {
        Self {
            date_time: e.date_time,
            symptoms: e.symptoms,
        }
    }
}
