//! Rendering of diagnostics against report text.

use turnscan::parser::errors::{ErrorCode, Severity, render, render_all};
use turnscan::parser::parse_report;

use crate::helpers::source_fixtures::LOCATION;

#[test]
fn test_render_points_at_the_bad_clause() {
    let input = format!("{LOCATION}Tribe Movement: Move NE-PR\\$$$\\SE-GH\n");
    let parse = parse_report(&input);
    assert_eq!(parse.errors.len(), 1);
    let error = &parse.errors[0];
    assert_eq!(error.code, ErrorCode::E0401);
    assert_eq!(error.severity, Severity::Error);

    let rendered = render(error, "0899-12.0987.report.txt", &input);
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(
        lines[0],
        "0899-12.0987.report.txt:2:28: error: a clause cannot start with '$'"
    );
    // the source line is cut off where the span ends
    assert_eq!(lines[1], "Tribe Movement: Move NE-PR\\$");
    assert_eq!(lines[2], format!("{}^", " ".repeat(27)));
}

#[test]
fn test_render_drops_carriage_return_from_source_line() {
    let input = format!("{}Tribe Movement: Move NE-PR\\$\r\n", LOCATION.replace('\n', "\r\n"));
    let parse = parse_report(&input);
    let rendered = render_all(&parse.errors, "<input>", &input);
    assert!(rendered.contains("\nTribe Movement: Move NE-PR\\$\n"));
    assert!(!rendered.contains('\r'));
}

#[test]
fn test_render_includes_notes() {
    let input = format!("{LOCATION}Tribe Movement: Move N-PR, (Sight Land - N\n");
    let parse = parse_report(&input);
    assert_eq!(parse.errors[0].code, ErrorCode::E0203);
    let rendered = render(&parse.errors[0], "<input>", &input);
    assert!(rendered.contains("unclosed '('"));
    assert!(rendered.contains("  note: the group ends at"));
}
