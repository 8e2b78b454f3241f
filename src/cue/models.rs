use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

pub const FRAMES_PER_SECOND: u64 = 75;
pub const MAX_TRACKS: usize = 99;

/// A parsed and validated cue sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CueSheet {
    pub file_name: String,
    pub format: String,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub date: Option<String>,
    pub tracks: Vec<Track>,
}

impl CueSheet {
    /// Looks up a track by its 1-based number.
    pub fn track(&self, number: usize) -> Option<&Track> {
        number.checked_sub(1).and_then(|i| self.tracks.get(i))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub number: usize,
    pub track_type: String,
    pub title: Option<String>,
    /// Start of the track audio (`INDEX 01`).
    pub index: Option<IndexPoint>,
}

/// An `MM:SS:FF` position, kept as written. No ceiling is applied to seconds or frames.
///
/// Comparison goes by the normalized offset, so `00:99:00` and `01:39:00` are equal.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct IndexPoint {
    minutes: u8,
    seconds: u8,
    frame: u8,
}

impl IndexPoint {
    pub fn new(minutes: u8, seconds: u8, frame: u8) -> Self {
        Self {
            minutes,
            seconds,
            frame,
        }
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Offset of the position without its frame part.
    pub fn timestamp(&self) -> Duration {
        Duration::from_secs(self.minutes as u64 * 60 + self.seconds as u64)
    }

    pub fn to_frames(&self) -> u64 {
        self.timestamp().as_secs() * FRAMES_PER_SECOND + self.frame as u64
    }

    fn key(&self) -> (Duration, u8) {
        (self.timestamp(), self.frame)
    }
}

impl PartialEq for IndexPoint {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for IndexPoint {}

impl PartialOrd for IndexPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for IndexPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for IndexPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.minutes, self.seconds, self.frame
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    /// Physical lines read, blank and skipped lines included.
    pub lines: usize,
    pub tracks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_echoes_fields_as_written() {
        let point = IndexPoint::new(0, 99, 0);
        assert_eq!(point.to_string(), "00:99:00");
        assert_eq!(point.timestamp(), Duration::from_secs(99));
    }

    #[test]
    fn compares_by_normalized_offset() {
        assert_eq!(IndexPoint::new(0, 99, 0), IndexPoint::new(1, 39, 0));
        assert!(IndexPoint::new(0, 99, 0) < IndexPoint::new(1, 39, 1));
        assert!(IndexPoint::new(1, 0, 74) < IndexPoint::new(0, 61, 0));
    }

    #[test]
    fn counts_cd_frames() {
        assert_eq!(IndexPoint::new(1, 2, 3).to_frames(), 62 * 75 + 3);
    }
}
