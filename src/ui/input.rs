//! Sources of user input for the menu loop. The loop only ever asks for "the
//! next line", so stdin and scripted test sessions plug in behind the same
//! trait without the operations noticing the difference.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Anything the menu can pull one line of user input from.
///
/// `Ok(None)` means the input is exhausted and the session should end.
pub trait LineSource {
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, normally locked stdin.
///
/// Bytes that are not valid UTF-8 (a Latin-1 terminal typing `ñ`, for
/// example) are replaced with U+FFFD instead of failing the read, so a stray
/// byte never ends the session.
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    /// Wrap a reader. Nothing is read until the menu asks for a line.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Pre-recorded answers, handed out in order. Tests use it to drive whole
/// menu sessions without a terminal.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Queue `lines` as the answers to the next prompts; once they run out
    /// the source reports end of input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_strips_line_endings() {
        let mut source = ReaderLines::new("first\r\nsecond\n last".as_bytes());
        assert_eq!(source.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some(" last"));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn reader_keeps_blank_lines() {
        let mut source = ReaderLines::new("\n".as_bytes());
        assert_eq!(source.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn reader_replaces_invalid_utf8_and_keeps_going() {
        let mut source = ReaderLines::new(&b"Ni\xf1o\n1\n"[..]);
        assert_eq!(
            source.read_line().unwrap().as_deref(),
            Some("Ni\u{fffd}o")
        );
        assert_eq!(source.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn scripted_input_runs_dry() {
        let mut source = ScriptedInput::new(["1"]);
        assert_eq!(source.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(source.read_line().unwrap(), None);
    }
}
