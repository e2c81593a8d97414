use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single unit inside a building. Every unit belongs to exactly one building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingUnit {
    pub id: Option<i32>,
    pub building_id: i32,
    pub unit_number: String,
    pub created_datetime: DateTime<Utc>,
    pub modified_datetime: DateTime<Utc>,
}

impl HousingUnit {
    pub fn new(building_id: i32, unit_number: String) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            building_id,
            unit_number,
            created_datetime: now,
            modified_datetime: now,
        }
    }

    pub fn with_id(
        id: i32,
        building_id: i32,
        unit_number: String,
        created_datetime: DateTime<Utc>,
        modified_datetime: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            building_id,
            unit_number,
            created_datetime,
            modified_datetime,
        }
    }
}

/// ISO-8601 with offset; UTC renders as `Z` and sub-second digits only appear
/// when present.
pub fn format_offset_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
