use cuesheet::CueError;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CuesheetError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("{failed} of {total} cue sheets are invalid")]
    ValidationFailed { failed: usize, total: usize },
}

pub type CuesheetResult<T> = result::Result<T, CuesheetError>;
