//! Diagnostic assertion helpers.

use turnscan::{Diagnostic, ErrorCode, ParseOptions, TurnOutput, parse_turn};

/// Parse a report that must have a usable turn header.
pub fn turn_from(source: &str) -> TurnOutput {
    match parse_turn(source, &ParseOptions::default()) {
        Ok(output) => output,
        Err(err) => panic!("report failed to parse: {err}"),
    }
}

/// Codes of `diagnostics`, in order.
pub fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
    diagnostics.iter().map(|d| d.code).collect()
}

/// Assert a parsed turn has no error-level diagnostics.
pub fn assert_no_errors(output: &TurnOutput) {
    let errors: Vec<_> = output.diagnostics.iter().filter(|d| d.is_error()).collect();
    assert!(
        errors.is_empty(),
        "Expected no errors, got {} error(s):\n{}",
        errors.len(),
        errors
            .iter()
            .map(|e| format!("  Line {}: {}", e.span.line, e.message))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
