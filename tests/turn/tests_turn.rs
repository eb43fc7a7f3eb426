//! Turn assembly end to end.

use rstest::rstest;
use turnscan::model::{MoveKind, TurnId};
use turnscan::{ErrorCode, ParseError, ParseOptions, Severity, parse_many, parse_turn};

use crate::helpers::diagnostic_helpers::{assert_no_errors, codes, turn_from};
use crate::helpers::source_fixtures::{CLAN_REPORT, ZERO_TURN_REPORT, tribe_report};

#[test]
fn test_clan_report_turn() {
    let output = turn_from(CLAN_REPORT);
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_eq!(output.turn.id, TurnId::new(899, 12));
    let units: Vec<_> = output.turn.units.keys().map(|u| u.to_string()).collect();
    assert_eq!(units, vec!["0987", "0987c1", "0987e1"]);
    assert_eq!(output.parse.text(), CLAN_REPORT);
}

#[test]
fn test_zero_turn_is_fatal() {
    let options = ParseOptions::default().with_expected_turn(TurnId::new(899, 12));
    let err = parse_turn(ZERO_TURN_REPORT, &options).unwrap_err();
    assert!(matches!(err, ParseError::ZeroTurn { line: 2 }));
    assert!(err.to_string().contains("CR-only"));
}

#[test]
fn test_crlf_report_matches_lf_report() {
    let crlf = CLAN_REPORT.replace('\n', "\r\n");
    let lf = turn_from(CLAN_REPORT);
    let crlf = turn_from(&crlf);
    assert!(crlf.diagnostics.is_empty());
    assert_eq!(lf.turn.units.len(), crlf.turn.units.len());
    for (unit, moves) in &lf.turn.units {
        let other = &crlf.turn.units[unit];
        let kinds: Vec<_> = moves.steps.iter().map(|m| (&m.kind, m.result, m.line_no)).collect();
        let other_kinds: Vec<_> = other.steps.iter().map(|m| (&m.kind, m.result, m.line_no)).collect();
        assert_eq!(kinds, other_kinds);
    }
}

#[test]
fn test_follows_first_end_to_end() {
    let output = turn_from(&tribe_report("Tribe Follows 0988\nTribe Movement: Move NE-PR\\SE-GH\n"));
    assert_no_errors(&output);
    assert_eq!(codes(&output.diagnostics), vec![ErrorCode::E0504]);
    assert_eq!(output.diagnostics[0].severity, Severity::Info);

    let tribe = output.turn.unit("0987").unwrap();
    assert!(tribe.steps.is_empty());
    assert!(matches!(tribe.directive.as_ref().map(|m| &m.kind), Some(MoveKind::Follows(_))));
}

#[rstest]
#[case(false, Severity::Warning)]
#[case(true, Severity::Error)]
fn test_strict_observations(#[case] strict: bool, #[case] expected: Severity) {
    let source = tribe_report("Tribe Movement: Move NE-PR, Wibble\n");
    let options = ParseOptions::default().with_strict_observations(strict);
    let output = parse_turn(&source, &options).unwrap();
    assert_eq!(codes(&output.diagnostics), vec![ErrorCode::W0401]);
    assert_eq!(output.diagnostics[0].severity, expected);
    assert_eq!(output.has_errors(), strict);
    assert_eq!(output.turn.unit("0987").unwrap().steps.len(), 1);
}

#[test]
fn test_batch_keeps_order_and_isolates_failures() {
    let inputs: Vec<(String, ParseOptions)> = vec![
        (CLAN_REPORT.to_string(), ParseOptions::default()),
        (ZERO_TURN_REPORT.to_string(), ParseOptions::default()),
        (tribe_report("Tribe Movement: Move N-PR\n"), ParseOptions::default()),
    ];
    let results = parse_many(&inputs);
    assert_eq!(results[0].as_ref().map(|o| o.turn.units.len()).ok(), Some(3));
    assert!(matches!(results[1], Err(ParseError::ZeroTurn { .. })));
    assert_eq!(results[2].as_ref().map(|o| o.turn.units.len()).ok(), Some(1));
}
