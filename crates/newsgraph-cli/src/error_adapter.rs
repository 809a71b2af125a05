//! Error adapter for converting NewsGraphError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. JSON parse errors
//! carry their source text, so they are rendered with a labelled snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use newsgraph::NewsGraphError;

/// Adapter implementing [`MietteDiagnostic`] for any [`NewsGraphError`].
pub struct ErrorAdapter<'a>(pub &'a NewsGraphError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            NewsGraphError::Io(_) => "newsgraph::io",
            NewsGraphError::Parse { .. } => "newsgraph::parse",
            NewsGraphError::InvalidInput(_) => "newsgraph::input",
            NewsGraphError::Export(_) => "newsgraph::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            NewsGraphError::Parse { err, .. } if err.is_eof() => {
                "the input ends before the JSON value is complete"
            }
            NewsGraphError::InvalidInput(_) => {
                "the payload needs a `news` object with a non-empty `id`"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            NewsGraphError::Parse { err, src } if err.line() > 0 => {
                Some(src as &dyn miette::SourceCode)
            }
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let NewsGraphError::Parse { err, src } = &self.0 else {
            return None;
        };
        if err.line() == 0 {
            return None;
        }

        let span = json_error_span(src, err.line(), err.column());
        let label = LabeledSpan::new_primary_with_span(Some("here".to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Converts a 1-based JSON error position into a miette [`SourceSpan`].
///
/// Positions past the end of the source collapse to an empty span at the end.
fn json_error_span(src: &str, line: usize, column: usize) -> SourceSpan {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();

    let mut offset = (line_start + column.saturating_sub(1)).min(src.len());
    while !src.is_char_boundary(offset) {
        offset -= 1;
    }
    let len = src[offset..].chars().next().map_or(0, char::len_utf8);

    SourceSpan::new(offset.into(), len)
}
