use crate::gpx::time::error::TimeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GpxError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    TimeError(#[from] TimeError),

    #[error("Time tag outside of <metadata> and <trk> on line {line_number}: {line}")]
    TimeOutsideRegion { line_number: usize, line: String },

    #[error("Track time found before any metadata time on line {line_number}: {line}")]
    TrackTimeBeforeMetadata { line_number: usize, line: String },

    #[error("No time tag found inside a <trk> region")]
    NoTrackTime,

    #[error("Output file already exists, use --force to overwrite: {0}")]
    OutputAlreadyExists(PathBuf),
}

pub type GpxResult<T> = Result<T, GpxError>;
