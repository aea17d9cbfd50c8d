//! Render lex and parse failures against the input they came from.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::SourceError;

/// Byte range to underline. Failures without a location point at the end
/// of the input.
fn error_range(error: &SourceError, source: &str) -> Range<usize> {
    let end = source.len();
    match error.span() {
        Some(span) => {
            let range = span.to_range();
            range.start.min(end)..range.end.min(end)
        }
        None => end..end,
    }
}

/// Write a diagnostic for `error` to `out`.
///
/// `name` identifies the input unit in the report header (a file path,
/// `<expr>` or `<stdin>`).
pub fn write_report<W: Write>(
    out: &mut W,
    error: &SourceError,
    name: &str,
    source: &str,
    color: bool,
) -> io::Result<()> {
    let range = error_range(error, source);
    Report::build(ReportKind::Error, name, range.start)
        .with_config(Config::default().with_color(color))
        .with_message(error.to_string())
        .with_label(
            Label::new((name, range))
                .with_message(error.label())
                .with_color(Color::Red),
        )
        .finish()
        .write((name, Source::from(source.to_owned())), out)
}
