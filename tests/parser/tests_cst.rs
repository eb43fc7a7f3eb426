//! CST construction: losslessness and line-level recovery.

use proptest::prelude::*;
use turnscan::parser::errors::ErrorCode;
use turnscan::parser::{AstNode, Line, SyntaxKind, TurnReport, parse_report};

use crate::helpers::source_fixtures::{CLAN_REPORT, LOCATION};

/// One line of a report, valid or not
fn report_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(LOCATION.trim_end().to_string()),
        Just("Current Turn 899-12 (#0), Winter, FINE".to_string()),
        Just("Tribe Movement: Move NE-PR, River S\\SE-GH".to_string()),
        Just("Scout 1:Scout N-PR\\N-O".to_string()),
        Just("0987 Status: PRAIRIE, 1987".to_string()),
        Just("Tribe Follows 0988".to_string()),
        "[a-zA-Z0-9 ,\\-=#()/\\\\:.$\u{1}]{0,60}",
    ]
}

fn report() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(report_line(), 0..12),
        prop_oneof![Just("\n"), Just("\r\n")],
    )
        .prop_map(|(lines, eol)| lines.join(eol))
}

proptest! {
    #[test]
    fn prop_cst_is_lossless(input in report()) {
        let parse = parse_report(&input);
        prop_assert_eq!(parse.text(), input.clone());
        let tokens: String = parse.tokens().map(|t| t.text().to_string()).collect();
        prop_assert_eq!(tokens, input);
    }

    #[test]
    fn prop_every_section_starts_at_a_location_line(input in report()) {
        let parse = parse_report(&input);
        let root = TurnReport::cast(parse.syntax()).unwrap();
        for section in root.sections() {
            prop_assert!(section.location().is_some());
        }
    }

    #[test]
    fn prop_errors_fall_inside_the_input(input in report()) {
        let parse = parse_report(&input);
        for error in &parse.errors {
            prop_assert!(error.span.end as usize <= input.len());
            prop_assert!(error.span.start <= error.span.end);
        }
    }
}

#[test]
fn test_clean_report_has_no_errors() {
    let parse = parse_report(CLAN_REPORT);
    assert!(parse.ok(), "{:?}", parse.errors);
    let root = TurnReport::cast(parse.syntax()).unwrap();
    assert_eq!(root.sections().count(), 3);
    assert_eq!(root.turn_infos().count(), 1);
}

#[test]
fn test_damaged_location_line_does_not_spread() {
    let input = concat!(
        "Tribe 0987, , Current Hex = 0203, (Previous Hex = QQ 0101)\n",
        "Tribe Movement: Move NE-PR\n",
        "Courier 0987c1, , Current Hex = QQ 0303, (Previous Hex = QQ 0203)\n",
        "Courier Follows 0987\n",
    );
    let parse = parse_report(input);
    assert!(!parse.errors.is_empty());
    assert!(parse.errors.iter().all(|e| e.span.line == 1), "{:?}", parse.errors);

    let root = TurnReport::cast(parse.syntax()).unwrap();
    let sections: Vec<_> = root.sections().collect();
    assert_eq!(sections.len(), 2);
    assert!(sections[0].lines().all(|line| !line.is_damaged()));
    let movement = sections[0].lines().find_map(|line| match line {
        Line::Movement(movement) => Some(movement),
        _ => None,
    });
    let movement = movement.unwrap();
    assert_eq!(parse.errors_in(movement.syntax()).count(), 0);
    assert!(matches!(sections[1].lines().next(), Some(Line::Follows(_))));
}

#[test]
fn test_bad_clause_is_wrapped_and_parsing_continues() {
    let input = format!("{LOCATION}Tribe Movement: Move NE-PR\\$$$\\SE-GH\nTribe Follows 0988\n");
    let parse = parse_report(&input);
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code, ErrorCode::E0401);
    assert_eq!(parse.errors[0].span.line, 2);
    assert!(parse.syntax().descendants().any(|n| n.kind() == SyntaxKind::BAD));
    assert!(parse.syntax().descendants().any(|n| n.kind() == SyntaxKind::FOLLOWS_LINE));
    assert_eq!(parse.text(), input);
}

#[test]
fn test_missing_token_leaves_a_missing_node() {
    let input = format!("{LOCATION}Scout 1 N-PR\n");
    let parse = parse_report(&input);
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code, ErrorCode::E0202);
    assert!(parse.syntax().descendants().any(|n| n.kind() == SyntaxKind::MISSING));
}
