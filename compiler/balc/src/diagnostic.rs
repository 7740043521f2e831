//! Rendering lexical errors as source-annotated reports.

use std::io::{self, Write};

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use bal_lexer::{LexError, LexErrorKind};

/// Write one report for `error` in `source`, named `path` in the output.
pub fn render(
    path: &str,
    source: &str,
    error: &LexError,
    color: bool,
    out: impl Write,
) -> io::Result<()> {
    let range = error.span.to_range();
    let label = match error.kind {
        LexErrorKind::UnterminatedTemplate { .. } | LexErrorKind::UnterminatedCdata => {
            "opened here"
        }
        LexErrorKind::SourceTooLarge => "lexing stopped here",
        _ => "here",
    };

    let mut report = Report::build(ReportKind::Error, path, range.start)
        .with_config(
            Config::default()
                .with_index_type(IndexType::Byte)
                .with_color(color),
        )
        .with_message(error.kind.to_string())
        .with_label(
            Label::new((path, range))
                .with_message(label)
                .with_color(Color::Red),
        );
    if let Some(help) = error.help() {
        report = report.with_help(help);
    }
    report.finish().write((path, Source::from(source)), out)
}
