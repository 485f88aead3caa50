use thiserror::Error;

use crate::student::Subject;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid {subject} score: {value:?}")]
    InvalidScore { subject: Subject, value: String },

    #[error("{subject} score {value} is out of range (max {max})")]
    ScoreOutOfRange {
        subject: Subject,
        value: u32,
        max: u32,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
