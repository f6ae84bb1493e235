/// All entity primary keys are time-ordered UUIDs (v7), assigned on insert.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (lease and management dates) carry no time zone.
pub type Date = chrono::NaiveDate;

/// Generate a fresh entity identifier.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::now_v7()
}
