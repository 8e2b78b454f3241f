//! Parser for CUE sheets, the text files that describe how an audio image is split into tracks.

pub mod cue;

pub use cue::error::{CueError, CueResult};
pub use cue::models::{CueSheet, IndexPoint, ParseSummary, Track};
pub use cue::{CueParser, parse, parse_observed, parse_str, parse_with_summary};
