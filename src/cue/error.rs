use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("line {line}:\t{text}:\n\t{source}")]
    Line {
        line: usize,
        text: String,
        source: LineError,
    },

    #[error("invalid cue sheet: {0}")]
    Invalid(#[from] ValidationError),
}

impl CueError {
    /// 1-based line number of the offending line, if the failure happened while reading commands.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type CueResult<T> = Result<T, CueError>;

#[derive(Debug, Error)]
pub enum LineError {
    #[error("unexpected command: {0}")]
    UnexpectedCommand(String),

    #[error("error parsing {command:?} command: {source}")]
    Command {
        command: String,
        source: CommandError,
    },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid {command} parameters: {source}")]
    InvalidParameters {
        command: &'static str,
        source: ArityError,
    },

    #[error("error parsing FILE format: {0}")]
    FileFormat(#[source] FieldError),

    #[error("error parsing FILE name: {0}")]
    FileName(#[source] FieldError),

    #[error("error parsing PERFORMER parameters: {0}")]
    Performer(#[source] FieldError),

    #[error("invalid track number: {0}")]
    TrackNumber(#[from] SequenceError),

    #[error("error parsing track type: {0}")]
    TrackType(#[source] FieldError),

    #[error("failed to parse index number: {0}")]
    IndexNumber(#[source] ParseIntError),

    #[error("expected index number 1, got {0}")]
    UnexpectedIndexNumber(i64),

    #[error("error parsing timestamp and frame: {0}")]
    Timestamp(#[from] TimestampError),

    #[error("no open track for INDEX")]
    NoOpenTrack,

    #[error(transparent)]
    Index(FieldError),

    #[error("error parsing album TITLE: {0}")]
    AlbumTitle(#[source] FieldError),

    #[error("error parsing track {track} TITLE: {source}")]
    TrackTitle { track: usize, source: FieldError },

    #[error("error parsing REM {command:?} command: {source}")]
    Rem {
        command: String,
        source: Box<CommandError>,
    },

    #[error("error parsing REM GENRE parameters: {0}")]
    Genre(#[source] FieldError),

    #[error("error parsing REM DATE parameters: {0}")]
    Date(#[source] FieldError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArityError {
    #[error("expected {expected} parameters, got {got}")]
    Exactly { expected: usize, got: usize },

    #[error("expected at least {expected} parameters, got {got}")]
    AtLeast { expected: usize, got: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field already set: {0}")]
    AlreadySet(String),
}

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("failed to parse track number: {0}")]
    InvalidNumber(#[from] ParseIntError),

    #[error("expected track number {expected}, got {got}")]
    Unexpected { expected: usize, got: i64 },

    #[error("cannot have more than {0} tracks")]
    TooManyTracks(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("invalid timestamp {0:?}, expected MM:SS:FF")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing file name")]
    MissingFileName,

    #[error("missing file format")]
    MissingFileFormat,

    #[error("missing tracks")]
    MissingTracks,

    #[error("invalid tracks: {0}")]
    InvalidTracks(#[from] TrackError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    #[error("missing track type")]
    MissingType,

    #[error("overlapping indices in tracks {first} and {second}")]
    OverlappingIndices { first: usize, second: usize },
}
