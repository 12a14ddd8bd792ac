use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Invalid formation: {0}")]
    InvalidFormation(String),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u8),

    #[error("Auto-lineup fetch failed: {0}")]
    FetchFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for LineupError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            LineupError::Deserialization(err.to_string())
        } else {
            LineupError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
