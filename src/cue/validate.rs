use crate::cue::error::{TrackError, ValidationError};
use crate::cue::handlers::{SheetBuilder, TrackBuilder};
use crate::cue::models::{CueSheet, Track};

impl SheetBuilder {
    /// Checks the structural rules that only hold once every line has been read.
    pub(crate) fn finish(mut self) -> Result<CueSheet, ValidationError> {
        let tracks = self.take_tracks();

        let file_name = self
            .file_name
            .into_inner()
            .ok_or(ValidationError::MissingFileName)?;
        let format = self
            .format
            .into_inner()
            .ok_or(ValidationError::MissingFileFormat)?;
        if tracks.is_empty() {
            return Err(ValidationError::MissingTracks);
        }
        let tracks = validate_tracks(tracks)?;

        Ok(CueSheet {
            file_name,
            format,
            performer: self.performer.into_inner(),
            title: self.title.into_inner(),
            genre: self.genre.into_inner(),
            date: self.date.into_inner(),
            tracks,
        })
    }
}

fn validate_tracks(tracks: Vec<TrackBuilder>) -> Result<Vec<Track>, TrackError> {
    let mut validated = Vec::with_capacity(tracks.len());
    let mut tracks = tracks.into_iter().peekable();

    while let Some(track) = tracks.next() {
        let number = validated.len() + 1;
        let track_type = track
            .track_type
            .into_inner()
            .ok_or(TrackError::MissingType)?;
        let index = track.index.into_inner();

        // A track without INDEX 01 orders as 00:00:00.
        if let Some(next) = tracks.peek() {
            let next_index = next.index.get().copied().unwrap_or_default();
            if index.unwrap_or_default() >= next_index {
                return Err(TrackError::OverlappingIndices {
                    first: number,
                    second: number + 1,
                });
            }
        }

        validated.push(Track {
            number,
            track_type,
            title: track.title.into_inner(),
            index,
        });
    }

    Ok(validated)
}
