use crate::cue::error::ArityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn check(self, got: usize) -> Result<(), ArityError> {
        match self {
            Self::Exactly(expected) if got != expected => Err(ArityError::Exactly { expected, got }),
            Self::AtLeast(expected) if got < expected => Err(ArityError::AtLeast { expected, got }),
            _ => Ok(()),
        }
    }
}

/// Every command the parser understands. `RemGenre` and `RemDate` are only reachable through `Rem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    File,
    Performer,
    Title,
    Track,
    Index,
    Rem,
    RemGenre,
    RemDate,
}

impl Command {
    /// Matches a top-level command token, ignoring case.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "FILE" => Some(Self::File),
            "PERFORMER" => Some(Self::Performer),
            "TITLE" => Some(Self::Title),
            "TRACK" => Some(Self::Track),
            "INDEX" => Some(Self::Index),
            "REM" => Some(Self::Rem),
            _ => None,
        }
    }

    /// Matches the token following `REM`.
    pub fn from_rem_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "GENRE" => Some(Self::RemGenre),
            "DATE" => Some(Self::RemDate),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::File => "FILE",
            Self::Performer => "PERFORMER",
            Self::Title => "TITLE",
            Self::Track => "TRACK",
            Self::Index => "INDEX",
            Self::Rem => "REM",
            Self::RemGenre => "GENRE",
            Self::RemDate => "DATE",
        }
    }

    /// Name used in parameter errors.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Index => "TRACK INDEX",
            Self::RemGenre => "REM GENRE",
            Self::RemDate => "REM DATE",
            other => other.name(),
        }
    }

    pub const fn arity(self) -> Arity {
        match self {
            Self::File | Self::Track | Self::Index => Arity::Exactly(2),
            Self::Performer | Self::Title | Self::Rem | Self::RemGenre | Self::RemDate => {
                Arity::AtLeast(1)
            }
        }
    }
}
