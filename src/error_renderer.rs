//! Error rendering using ariadne
//!
//! Syntax errors are printed with the offending input underlined. Errors
//! raised by folding or evaluation carry no position and are printed as a
//! single line.

use crate::{Error, ErrorKind};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expr>";

/// Render an error to stderr
///
/// # Example
/// ```no_run
/// use exparse::{parse_expression, render_error};
///
/// let source = "5 + ) 3";
/// if let Err(e) = parse_expression(source) {
///     render_error(source, &e);
/// }
/// ```
pub fn render_error(source: &str, error: &Error) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(source: &str, error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color codes,
/// making the output easier to compare in tests.
pub fn render_error_to_string_no_color(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error.span() {
        Some(span) => render_syntax_error(source, span, error.message(), writer, use_color),
        None => writeln!(writer, "{}: {}", kind_label(error.kind()), error.message()),
    }
}

fn kind_label(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Syntax => "Syntax error",
        ErrorKind::UnknownSymbol => "Unknown symbol",
        ErrorKind::BadFunctionCall => "Bad function call",
        ErrorKind::Conversion => "Conversion error",
        ErrorKind::BadSyntax => "Bad syntax",
    }
}

fn render_syntax_error(
    source: &str,
    span: std::ops::Range<usize>,
    message: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    // ariadne counts characters, the parser reports byte offsets. A trailing
    // blank gives errors at the end of input something to point at.
    let start = source[..span.start.min(source.len())].chars().count();
    let end = start + 1;
    let padded = format!("{} ", source);

    let report = Report::build(ReportKind::Error, (SOURCE_ID, start..end))
        .with_message("Syntax error")
        .with_config(ariadne::Config::default().with_color(use_color))
        .with_label(
            Label::new((SOURCE_ID, start..end))
                .with_message(message)
                .with_color(colors.next()),
        );

    report
        .finish()
        .write((SOURCE_ID, Source::from(padded)), &mut *writer)
}
