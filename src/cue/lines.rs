use std::io::{self, BufRead};

const BOM: char = '\u{feff}';

/// Space, double quote, tab and newline.
pub const TRIM_CHARS: &[char] = &[' ', '"', '\t', '\n'];

pub fn trim(value: &str) -> &str {
    value.trim_matches(TRIM_CHARS)
}

/// Yields `(line number, trimmed text)` for every line that carries a command.
///
/// A leading UTF-8 byte order mark is dropped. Blank lines and bare `REM` lines are
/// skipped but still advance the line counter. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD rather than failing the line.
pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    line_nr: usize,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_nr: 0,
        }
    }

    /// Number of physical lines consumed so far.
    pub fn consumed(&self) -> usize {
        self.line_nr
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(err)),
            }
            self.line_nr += 1;

            let bytes = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            let decoded = String::from_utf8_lossy(bytes);
            let decoded: &str = &decoded;

            let raw = match self.line_nr {
                1 => decoded.strip_prefix(BOM).unwrap_or(decoded),
                _ => decoded,
            };
            let line = trim(raw);
            if line.is_empty() || line == "REM" {
                continue;
            }
            return Some(Ok((self.line_nr, line.to_string())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(usize, String)> {
        Lines::new(input.as_bytes())
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn skips_blank_and_bare_rem_lines_but_counts_them() {
        let lines = collect("\n  \t\nREM\nTITLE x\n\n\"\"\nREM GENRE Rock\n");
        assert_eq!(
            lines,
            vec![(4, "TITLE x".to_string()), (7, "REM GENRE Rock".to_string())]
        );
    }

    #[test]
    fn trims_quotes_and_whitespace() {
        let lines = collect("\t  TITLE \"Hello World\"  \r\n");
        assert_eq!(lines, vec![(1, "TITLE \"Hello World".to_string())]);
    }

    #[test]
    fn strips_byte_order_mark() {
        assert_eq!(collect("\u{feff}FILE a WAVE\n"), collect("FILE a WAVE\n"));
    }

    #[test]
    fn keeps_byte_order_mark_after_first_line() {
        let lines = collect("FILE a WAVE\n\u{feff}TRACK 01 AUDIO\n");
        assert_eq!(lines[1].1, "\u{feff}TRACK 01 AUDIO");
    }

    #[test]
    fn replaces_invalid_utf8_and_keeps_counting() {
        let lines = Lines::new(&b"TITLE Caf\xe9\r\nPERFORMER x\n"[..])
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(
            lines,
            vec![
                (1, "TITLE Caf\u{fffd}".to_string()),
                (2, "PERFORMER x".to_string())
            ]
        );
    }

    #[test]
    fn last_line_without_newline() {
        assert_eq!(collect("A\nB"), vec![(1, "A".to_string()), (2, "B".to_string())]);
    }

    #[test]
    fn reports_consumed_lines() {
        let mut lines = Lines::new("A\n\n\n".as_bytes());
        while lines.next().is_some() {}
        assert_eq!(lines.consumed(), 3);
    }
}
