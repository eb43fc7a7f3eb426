//! Extraction of owned values from a parsed report.

use turnscan::LineIndex;
use turnscan::parser::{AstNode, Step, TurnReport, parse_report};
use turnscan::syntax::{
    HexLocation, ReportDate, Which, YearMonth, extract_step, extract_turn_info, extract_unit_location,
};

use crate::helpers::source_fixtures::CLAN_REPORT;

#[test]
fn test_extract_every_location_in_a_clan_report() {
    let parse = parse_report(CLAN_REPORT);
    let index = LineIndex::new(CLAN_REPORT);
    let root = TurnReport::cast(parse.syntax()).unwrap();
    let locations: Vec<_> = root
        .sections()
        .filter_map(|s| s.location())
        .map(|l| extract_unit_location(&l, &index))
        .collect();

    let ids: Vec<_> = locations.iter().map(|l| l.unit_id.text.as_str()).collect();
    assert_eq!(ids, vec!["0987", "0987c1", "0987e1"]);
    let types: Vec<_> = locations.iter().map(|l| l.unit_type.as_str()).collect();
    assert_eq!(types, vec!["Tribe", "Courier", "Element"]);

    let tribe = &locations[0];
    assert_eq!(tribe.unit_id.span.line, 1);
    assert_eq!(tribe.unit_id.span.column, 7);
    assert_eq!(tribe.current.which, Which::Current);
    assert_eq!(tribe.current.hex.grid(), Some("QQ"));
    assert_eq!(tribe.current.hex.row_col(), Some("0203"));
    assert_eq!(tribe.previous.hex.row_col(), Some("0101"));

    let element = &locations[2];
    assert_eq!(element.span.line, 11);
    assert_eq!(element.note, "Scouting party");
    assert!(matches!(element.current.hex, HexLocation::Obscured { .. }));
    assert_eq!(element.current.hex.row_col(), Some("1304"));
    assert!(element.previous.hex.is_not_applicable());
}

#[test]
fn test_extract_header() {
    let parse = parse_report(CLAN_REPORT);
    let index = LineIndex::new(CLAN_REPORT);
    let root = TurnReport::cast(parse.syntax()).unwrap();
    let info = extract_turn_info(&root.turn_infos().next().unwrap(), &index);
    assert_eq!(info.span.line, 2);
    assert_eq!(info.current, YearMonth { year: 899, month: 12 });
    assert_eq!(info.next.map(|(next, _)| next), Some(YearMonth { year: 900, month: 1 }));
    assert_eq!(
        info.report_date,
        Some(ReportDate {
            day: 29,
            month: 10,
            year: 2023
        })
    );
}

#[test]
fn test_extract_steps_keep_source_positions() {
    let parse = parse_report(CLAN_REPORT);
    let index = LineIndex::new(CLAN_REPORT);
    let steps: Vec<_> = parse
        .syntax()
        .descendants()
        .filter_map(Step::cast)
        .map(|s| extract_step(&s, &index))
        .collect();

    // movement (2), scout 1 (2), scout 2 (1), status (1)
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0].span.line, 3);
    assert_eq!(steps[0].clauses[0].texts(), vec!["NE", "-", "PR"]);
    assert_eq!(steps[1].clauses[1].groups.len(), 1);
    assert_eq!(steps[1].clauses[1].groups[0].clauses.len(), 2);
    assert!(steps.iter().all(|s| s.clauses.iter().all(|c| !c.bad)));
    assert_eq!(steps[5].span.line, 6);
}
