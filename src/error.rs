//! Errors for decoding design trees

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid design tree at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },
}

impl SchemaError {
    pub(crate) fn from_json(err: &serde_json::Error) -> Self {
        let message = err.to_string();
        // serde_json appends the position to its message; the report shows it separately
        let message = match message.rfind(" at line ") {
            Some(idx) => message[..idx].to_string(),
            None => message,
        };
        SchemaError::Json {
            line: err.line(),
            column: err.column(),
            message,
        }
    }

    /// Byte span in `source` the error points at
    pub fn span(&self, source: &str) -> Span {
        match self {
            SchemaError::Json { line, column, .. } => {
                let line_start: usize = source
                    .split_inclusive('\n')
                    .take(line.saturating_sub(1))
                    .map(str::len)
                    .sum();
                let start = (line_start + column.saturating_sub(1)).min(source.len());
                let end = (start + 1).min(source.len());
                start..end
            }
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            SchemaError::Json { message, .. } => {
                let span = self.span(source);
                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message("invalid design tree")
                    .with_label(
                        Label::new((filename, span))
                            .with_message(message)
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}
