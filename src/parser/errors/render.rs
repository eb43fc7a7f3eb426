//! Plain-text rendering of diagnostics.
//!
//! ```text
//! 0899-12.0987.report.txt:3:14: error: expected ',' in unit location line
//! Tribe 0987, , Current Hex = QQ 0203 (Previous Hex = QQ 0101)
//!              ^
//! ```
//!
//! Only the line holding the start of the span is printed, cut off at the
//! span's end when that comes before the line end. Spans that run over
//! several lines still render that one line and a single caret.

use std::fmt::Write;

use super::error::Diagnostic;

/// Render one diagnostic against its source text.
pub fn render(diagnostic: &Diagnostic, file_name: &str, source: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}:{}:{}: {}: {}",
        file_name, diagnostic.span.line, diagnostic.span.column, diagnostic.severity, diagnostic.message
    );

    let span = &diagnostic.span;
    let (line, rune_column) = source_line(source, span.start as usize, span.end as usize);
    out.push_str(line);
    out.push('\n');
    out.push_str(&" ".repeat(rune_column.saturating_sub(1)));
    out.push_str("^\n");

    for note in &diagnostic.notes {
        let _ = writeln!(out, "  note: {}", note);
    }
    out
}

/// Render every diagnostic, in order.
pub fn render_all(diagnostics: &[Diagnostic], file_name: &str, source: &str) -> String {
    diagnostics
        .iter()
        .map(|d| render(d, file_name, source))
        .collect()
}

/// The text from the start of the line containing `offset` up to the line
/// end, or up to `end` when that comes first, plus the 1-based rune column
/// of `offset` within it. An `end` at or before `offset` is ignored.
fn source_line(source: &str, offset: usize, end: usize) -> (&str, usize) {
    let offset = floor_char_boundary(source, offset);
    let start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let mut line_end = source[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or(source.len());
    if end > offset {
        line_end = line_end.min(floor_char_boundary(source, end));
    }
    let line = source[start..line_end].trim_end_matches('\r');
    let rune_column = source[start..offset].chars().count() + 1;
    (line, rune_column)
}

fn floor_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
