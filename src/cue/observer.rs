use crate::cue::error::CueError;
use crate::cue::models::{CueSheet, ParseSummary};
use log::{debug, info};

/// Hook for callers that want to know how a parse ended. Both methods default to doing nothing.
pub trait ParseObserver {
    fn parsed(&self, _sheet: &CueSheet, _summary: &ParseSummary) {}

    fn failed(&self, _error: &CueError) {}
}

/// Reports parse outcomes through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ParseObserver for LogObserver {
    fn parsed(&self, sheet: &CueSheet, summary: &ParseSummary) {
        info!(
            "cue sheet parsed correctly: lines={} file={} format={} tracks={}",
            summary.lines, sheet.file_name, sheet.format, summary.tracks
        );
    }

    fn failed(&self, error: &CueError) {
        debug!("cue sheet rejected: {error}");
    }
}
