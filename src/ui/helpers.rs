//! Output helpers shared by the menu loop.

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::{style, Stylize};

/// Severity of a one-line notice printed after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Success,
    Error,
}

/// Print a notice, coloured by severity when `styled` is set.
pub(crate) fn write_status<W: Write>(
    out: &mut W,
    styled: bool,
    kind: StatusKind,
    text: impl Display,
) -> io::Result<()> {
    if !styled {
        return writeln!(out, "{text}");
    }
    let content = match kind {
        StatusKind::Info => style(text).yellow(),
        StatusKind::Success => style(text).green(),
        StatusKind::Error => style(text).red(),
    };
    writeln!(out, "{content}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut out = Vec::new();
        write_status(&mut out, false, StatusKind::Error, "Artist not found").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Artist not found\n");
    }

    #[test]
    fn styled_output_keeps_text() {
        let mut out = Vec::new();
        write_status(&mut out, true, StatusKind::Success, "ok").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ok"));
        assert!(text.ends_with('\n'));
    }
}
