use crate::cue::error::{CueError, CueResult};
use crate::cue::handlers::SheetBuilder;
use crate::cue::lines::Lines;
use crate::cue::models::{CueSheet, ParseSummary};
use crate::cue::observer::{LogObserver, ParseObserver};
use log::debug;
use std::io::{BufRead, Cursor};
use std::path::{Path, PathBuf};

pub mod command;
pub mod error;
pub mod field;
mod handlers;
pub mod lines;
pub mod models;
pub mod observer;
pub mod timestamp;
mod validate;

/// Parses a cue sheet from `reader`.
pub fn parse<R: BufRead>(reader: R) -> CueResult<CueSheet> {
    parse_with_summary(reader).map(|(sheet, _)| sheet)
}

pub fn parse_str(input: &str) -> CueResult<CueSheet> {
    parse(input.as_bytes())
}

/// Parses a cue sheet and also reports how many lines and tracks were read.
pub fn parse_with_summary<R: BufRead>(reader: R) -> CueResult<(CueSheet, ParseSummary)> {
    let mut lines = Lines::new(reader);
    let mut sheet = SheetBuilder::default();

    for line in lines.by_ref() {
        let (line_nr, text) = line?;
        if let Err(source) = sheet.apply_line(&text) {
            return Err(CueError::Line {
                line: line_nr,
                text,
                source,
            });
        }
    }

    let sheet = sheet.finish()?;
    let summary = ParseSummary {
        lines: lines.consumed(),
        tracks: sheet.tracks.len(),
    };
    Ok((sheet, summary))
}

/// Same as [`parse`], reporting the outcome to `observer`.
pub fn parse_observed<R: BufRead>(reader: R, observer: &dyn ParseObserver) -> CueResult<CueSheet> {
    match parse_with_summary(reader) {
        Ok((sheet, summary)) => {
            observer.parsed(&sheet, &summary);
            Ok(sheet)
        }
        Err(err) => {
            observer.failed(&err);
            Err(err)
        }
    }
}

/// Reads and parses a `.cue` file from disk.
pub struct CueParser {
    cue_path: PathBuf,
}

impl CueParser {
    pub fn new(cue_path: impl AsRef<Path>) -> Self {
        Self {
            cue_path: cue_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.cue_path
    }

    pub async fn parse(&self) -> CueResult<CueSheet> {
        debug!("Reading CUE file: {:?}", self.cue_path);
        let data = tokio::fs::read(&self.cue_path).await?;
        debug!("Read {} bytes", data.len());

        parse_observed(Cursor::new(data), &LogObserver)
    }
}
