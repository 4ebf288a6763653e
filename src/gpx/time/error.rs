use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Timestamp is missing the trailing UTC designator 'Z': {0}")]
    MissingUtcDesignator(String),

    #[error("Timestamp does not match the YYYY-MM-DDTHH:MM:SS.mmmZ profile: {0}")]
    InvalidProfile(String),

    #[error("Could not parse timestamp {text}: {source}")]
    InvalidTimestamp {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Epoch {0} is outside the representable date range")]
    OutOfRange(i64),

    #[error("Shifting epoch {epoch} by {delta} seconds overflows")]
    ShiftOverflow { epoch: i64, delta: i64 },
}

pub type TimeResult<T> = Result<T, TimeError>;
