use crate::cue::command::{Arity, Command};
use crate::cue::error::{ArityError, CommandError, FieldError, LineError, SequenceError};
use crate::cue::field::Field;
use crate::cue::lines::trim;
use crate::cue::models::{IndexPoint, MAX_TRACKS};
use crate::cue::timestamp::parse_index_point;

type HandlerResult = Result<(), CommandError>;

#[derive(Debug, Default)]
pub(crate) struct TrackBuilder {
    pub(crate) track_type: Field<String>,
    pub(crate) title: Field<String>,
    pub(crate) index: Field<IndexPoint>,
}

/// The document while commands are still being applied.
#[derive(Debug, Default)]
pub(crate) struct SheetBuilder {
    pub(crate) file_name: Field<String>,
    pub(crate) format: Field<String>,
    pub(crate) performer: Field<String>,
    pub(crate) title: Field<String>,
    pub(crate) genre: Field<String>,
    pub(crate) date: Field<String>,
    pub(crate) tracks: Vec<TrackBuilder>,
    /// The track opened by the last TRACK command, moved into `tracks` when the next one opens.
    pub(crate) current_track: Option<TrackBuilder>,
}

impl SheetBuilder {
    pub(crate) fn track_count(&self) -> usize {
        self.tracks.len() + usize::from(self.current_track.is_some())
    }

    /// Closes the open track and hands back every track in order.
    pub(crate) fn take_tracks(&mut self) -> Vec<TrackBuilder> {
        if let Some(track) = self.current_track.take() {
            self.tracks.push(track);
        }
        std::mem::take(&mut self.tracks)
    }

    /// Applies one normalized, non-empty line.
    pub(crate) fn apply_line(&mut self, line: &str) -> Result<(), LineError> {
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else {
            return Ok(());
        };
        let parameters: Vec<&str> = fields.collect();

        let command =
            Command::from_token(name).ok_or_else(|| LineError::UnexpectedCommand(name.to_string()))?;

        self.apply(command, &parameters)
            .map_err(|source| LineError::Command {
                command: name.to_string(),
                source,
            })
    }

    fn apply(&mut self, command: Command, parameters: &[&str]) -> HandlerResult {
        command
            .arity()
            .check(parameters.len())
            .map_err(|source| CommandError::InvalidParameters {
                command: command.label(),
                source,
            })?;

        match command {
            Command::File => self.parse_file(parameters),
            Command::Performer => self.parse_performer(parameters),
            Command::Title => self.parse_title(parameters),
            Command::Track => self.parse_track(parameters),
            Command::Index => self.parse_index(parameters),
            Command::Rem => self.parse_rem(parameters),
            Command::RemGenre => self.parse_genre(parameters),
            Command::RemDate => self.parse_date(parameters),
        }
    }

    fn parse_file(&mut self, parameters: &[&str]) -> HandlerResult {
        let Some((format, name)) = parameters.split_last() else {
            return Err(shape_error(Command::File, parameters));
        };
        assign_string(&mut self.format, format).map_err(CommandError::FileFormat)?;
        assign_joined(&mut self.file_name, name).map_err(CommandError::FileName)
    }

    fn parse_performer(&mut self, parameters: &[&str]) -> HandlerResult {
        assign_joined(&mut self.performer, parameters).map_err(CommandError::Performer)
    }

    fn parse_title(&mut self, parameters: &[&str]) -> HandlerResult {
        let track = self.track_count();
        match self.current_track.as_mut() {
            None => assign_joined(&mut self.title, parameters).map_err(CommandError::AlbumTitle),
            Some(current) => assign_joined(&mut current.title, parameters)
                .map_err(|source| CommandError::TrackTitle { track, source }),
        }
    }

    fn parse_track(&mut self, parameters: &[&str]) -> HandlerResult {
        let [number, track_type] = parameters else {
            return Err(shape_error(Command::Track, parameters));
        };
        self.next_track(number)?;

        let mut track = TrackBuilder::default();
        assign_string(&mut track.track_type, track_type).map_err(CommandError::TrackType)?;

        if let Some(previous) = self.current_track.replace(track) {
            self.tracks.push(previous);
        }
        Ok(())
    }

    /// Checks that `number` continues the 1-based sequence and stays under the track ceiling.
    fn next_track(&self, number: &str) -> Result<(), SequenceError> {
        let number: i64 = number.parse()?;
        let expected = self.track_count() + 1;
        if number != expected as i64 {
            return Err(SequenceError::Unexpected {
                expected,
                got: number,
            });
        }
        if expected > MAX_TRACKS {
            return Err(SequenceError::TooManyTracks(MAX_TRACKS));
        }
        Ok(())
    }

    fn parse_index(&mut self, parameters: &[&str]) -> HandlerResult {
        let [number, position] = parameters else {
            return Err(shape_error(Command::Index, parameters));
        };
        let number: i64 = number.parse().map_err(CommandError::IndexNumber)?;
        if number != 1 {
            return Err(CommandError::UnexpectedIndexNumber(number));
        }

        let point = parse_index_point(position)?;
        let track = self.current_track.as_mut().ok_or(CommandError::NoOpenTrack)?;
        track.index.assign(point).map_err(CommandError::Index)
    }

    fn parse_rem(&mut self, parameters: &[&str]) -> HandlerResult {
        let Some((name, rest)) = parameters.split_first() else {
            return Err(shape_error(Command::Rem, parameters));
        };
        // Other REM comments carry nothing we keep.
        let Some(command) = Command::from_rem_token(name) else {
            return Ok(());
        };
        self.apply(command, rest).map_err(|source| CommandError::Rem {
            command: name.to_string(),
            source: Box::new(source),
        })
    }

    fn parse_genre(&mut self, parameters: &[&str]) -> HandlerResult {
        assign_joined(&mut self.genre, parameters).map_err(CommandError::Genre)
    }

    fn parse_date(&mut self, parameters: &[&str]) -> HandlerResult {
        assign_joined(&mut self.date, parameters).map_err(CommandError::Date)
    }
}

/// Parameter error for a handler whose slice pattern does not match what it was given.
fn shape_error(command: Command, parameters: &[&str]) -> CommandError {
    let got = parameters.len();
    let source = match command.arity() {
        Arity::Exactly(expected) => ArityError::Exactly { expected, got },
        Arity::AtLeast(expected) => ArityError::AtLeast { expected, got },
    };
    CommandError::InvalidParameters {
        command: command.label(),
        source,
    }
}

fn assign_string(field: &mut Field<String>, value: &str) -> Result<(), FieldError> {
    field.assign(trim(value).to_string())
}

fn assign_joined(field: &mut Field<String>, parameters: &[&str]) -> Result<(), FieldError> {
    assign_string(field, &parameters.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(lines: &[&str]) -> Result<SheetBuilder, LineError> {
        let mut sheet = SheetBuilder::default();
        for line in lines {
            sheet.apply_line(line)?;
        }
        Ok(sheet)
    }

    fn error(lines: &[&str]) -> String {
        apply_all(lines).unwrap_err().to_string()
    }

    #[test]
    fn file_splits_name_and_format() {
        let sheet = apply_all(&["FILE \"sample.flac\" WAVE"]).unwrap();
        assert_eq!(sheet.file_name.get().unwrap(), "sample.flac");
        assert_eq!(sheet.format.get().unwrap(), "WAVE");
    }

    #[test]
    fn file_requires_exactly_two_parameters() {
        assert_eq!(
            error(&["FILE a.flac"]),
            "error parsing \"FILE\" command: invalid FILE parameters: expected 2 parameters, got 1"
        );
        assert_eq!(
            error(&["FILE my album.flac WAVE"]),
            "error parsing \"FILE\" command: invalid FILE parameters: expected 2 parameters, got 3"
        );
    }

    #[test]
    fn duplicate_file_reports_format_first() {
        assert_eq!(
            error(&["FILE a.flac WAVE", "FILE a.flac WAVE"]),
            "error parsing \"FILE\" command: error parsing FILE format: field already set: WAVE"
        );
    }

    #[test]
    fn command_name_keeps_original_case_in_errors() {
        assert_eq!(
            error(&["file a.flac"]),
            "error parsing \"file\" command: invalid FILE parameters: expected 2 parameters, got 1"
        );
    }

    #[test]
    fn unexpected_command() {
        assert_eq!(
            error(&["UNSUPPORTED foo bar"]),
            "unexpected command: UNSUPPORTED"
        );
    }

    #[test]
    fn performer_joins_parameters() {
        let sheet = apply_all(&["PERFORMER \"The  Band"]).unwrap();
        assert_eq!(sheet.performer.get().unwrap(), "The Band");
        assert_eq!(
            error(&["PERFORMER"]),
            "error parsing \"PERFORMER\" command: invalid PERFORMER parameters: expected at least 1 parameters, got 0"
        );
        assert_eq!(
            error(&["PERFORMER a", "PERFORMER b"]),
            "error parsing \"PERFORMER\" command: error parsing PERFORMER parameters: field already set: a"
        );
    }

    #[test]
    fn title_goes_to_album_before_first_track() {
        let sheet = apply_all(&["TITLE Album", "TRACK 01 AUDIO", "TITLE Song One"]).unwrap();
        assert_eq!(sheet.title.get().unwrap(), "Album");
        let track = sheet.current_track.as_ref().unwrap();
        assert_eq!(track.title.get().unwrap(), "Song One");
    }

    #[test]
    fn duplicate_titles() {
        assert_eq!(
            error(&["TITLE a", "TITLE b"]),
            "error parsing \"TITLE\" command: error parsing album TITLE: field already set: a"
        );
        assert_eq!(
            error(&["TRACK 01 AUDIO", "TRACK 02 AUDIO", "TITLE a", "TITLE a"]),
            "error parsing \"TITLE\" command: error parsing track 2 TITLE: field already set: a"
        );
    }

    #[test]
    fn tracks_must_be_consecutive() {
        assert_eq!(
            error(&["TRACK 02 AUDIO"]),
            "error parsing \"TRACK\" command: invalid track number: expected track number 1, got 2"
        );
        assert_eq!(
            error(&["TRACK 01 AUDIO", "TRACK 01 AUDIO"]),
            "error parsing \"TRACK\" command: invalid track number: expected track number 2, got 1"
        );
        assert!(error(&["TRACK one AUDIO"])
            .starts_with("error parsing \"TRACK\" command: invalid track number: failed to parse track number: "));
    }

    #[test]
    fn track_ceiling() {
        let mut sheet = SheetBuilder::default();
        for number in 1..=MAX_TRACKS {
            sheet.apply_line(&format!("TRACK {number:02} AUDIO")).unwrap();
        }
        assert_eq!(sheet.track_count(), MAX_TRACKS);
        let err = sheet.apply_line("TRACK 100 AUDIO").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error parsing \"TRACK\" command: invalid track number: cannot have more than 99 tracks"
        );
        assert_eq!(sheet.track_count(), MAX_TRACKS);
    }

    #[test]
    fn track_cursor_moves_forward() {
        let mut sheet = apply_all(&["TRACK 01 AUDIO", "TRACK 02 DATA"]).unwrap();
        assert_eq!(sheet.tracks.len(), 1);
        let tracks = sheet.take_tracks();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[1].track_type.get().unwrap(), "DATA");
        assert!(sheet.current_track.is_none());
    }

    #[test]
    fn index_sets_open_track() {
        let sheet = apply_all(&["TRACK 01 AUDIO", "INDEX 01 02:03:04"]).unwrap();
        let index = sheet.current_track.unwrap().index.into_inner().unwrap();
        assert_eq!(index, IndexPoint::new(2, 3, 4));
    }

    #[test]
    fn index_errors() {
        assert_eq!(
            error(&["TRACK 01 AUDIO", "INDEX 00 00:00:00"]),
            "error parsing \"INDEX\" command: expected index number 1, got 0"
        );
        assert!(error(&["TRACK 01 AUDIO", "INDEX x 00:00:00"])
            .starts_with("error parsing \"INDEX\" command: failed to parse index number: "));
        assert_eq!(
            error(&["TRACK 01 AUDIO", "INDEX 01 0:00:00"]),
            "error parsing \"INDEX\" command: error parsing timestamp and frame: invalid timestamp \"0:00:00\", expected MM:SS:FF"
        );
        assert_eq!(
            error(&["TRACK 01 AUDIO", "INDEX 01 00:00:00", "INDEX 01 00:00:00"]),
            "error parsing \"INDEX\" command: field already set: 00:00:00"
        );
        assert_eq!(
            error(&["INDEX 01 00:00:00"]),
            "error parsing \"INDEX\" command: no open track for INDEX"
        );
        assert_eq!(
            error(&["INDEX 01"]),
            "error parsing \"INDEX\" command: invalid TRACK INDEX parameters: expected 2 parameters, got 1"
        );
    }

    #[test]
    fn rem_genre_and_date() {
        let sheet = apply_all(&["REM GENRE Progressive Rock", "rem date 1973"]).unwrap();
        assert_eq!(sheet.genre.get().unwrap(), "Progressive Rock");
        assert_eq!(sheet.date.get().unwrap(), "1973");
    }

    #[test]
    fn rem_errors() {
        assert_eq!(
            error(&["REM GENRE"]),
            "error parsing \"REM\" command: error parsing REM \"GENRE\" command: invalid REM GENRE parameters: expected at least 1 parameters, got 0"
        );
        assert_eq!(
            error(&["REM DATE 1973", "REM DATE 1974"]),
            "error parsing \"REM\" command: error parsing REM \"DATE\" command: error parsing REM DATE parameters: field already set: 1973"
        );
        assert_eq!(
            error(&["rem"]),
            "error parsing \"rem\" command: invalid REM parameters: expected at least 1 parameters, got 0"
        );
    }

    #[test]
    fn handlers_reject_parameters_they_cannot_destructure() {
        let mut sheet = SheetBuilder::default();
        assert_eq!(
            sheet.parse_track(&["01"]).unwrap_err().to_string(),
            "invalid TRACK parameters: expected 2 parameters, got 1"
        );
        assert_eq!(
            sheet.parse_index(&["01", "00:00:00", "x"]).unwrap_err().to_string(),
            "invalid TRACK INDEX parameters: expected 2 parameters, got 3"
        );
        assert_eq!(
            sheet.parse_file(&[]).unwrap_err().to_string(),
            "invalid FILE parameters: expected 2 parameters, got 0"
        );
        assert_eq!(
            sheet.parse_rem(&[]).unwrap_err().to_string(),
            "invalid REM parameters: expected at least 1 parameters, got 0"
        );
        assert_eq!(sheet.track_count(), 0);
    }

    #[test]
    fn unknown_rem_comments_are_ignored() {
        let sheet = apply_all(&["REM COMMENT \"ExactAudioCopy v1.0\"", "REM DISCID 12345"]).unwrap();
        assert!(!sheet.genre.is_set());
        assert!(!sheet.date.is_set());
    }
}
