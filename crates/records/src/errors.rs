use mongodb::bson;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] mongodb::error::Error),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Failed to encode record: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("Failed to decode record: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("Inserted id is not an ObjectId: {0}")]
    UnexpectedId(String),
}
