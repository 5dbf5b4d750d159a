/// Archive primary keys are PostgreSQL `BIGINT GENERATED ALWAYS AS IDENTITY`.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A stored row that carries its generated id.
pub trait Identified {
    fn id(&self) -> DbId;
}
