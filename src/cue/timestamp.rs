use crate::cue::error::TimestampError;
use crate::cue::models::IndexPoint;

/// Parses a fixed width `MM:SS:FF` position.
pub fn parse_index_point(value: &str) -> Result<IndexPoint, TimestampError> {
    let malformed = || TimestampError::Malformed(value.to_string());

    let bytes = value.as_bytes();
    if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
        return Err(malformed());
    }

    let field = |at: usize| -> Result<u8, TimestampError> {
        match (bytes[at], bytes[at + 1]) {
            (hi @ b'0'..=b'9', lo @ b'0'..=b'9') => Ok((hi - b'0') * 10 + (lo - b'0')),
            _ => Err(malformed()),
        }
    };

    Ok(IndexPoint::new(field(0)?, field(3)?, field(6)?))
}
