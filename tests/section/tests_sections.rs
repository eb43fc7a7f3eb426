//! Section grammar over whole reports.

use turnscan::LineIndex;
use turnscan::model::{
    BorderKind, Direction, Edge, FarTerrain, HexTarget, MoveKind, MoveResult, Resource, Terrain, TurnId,
};
use turnscan::parser::errors::{DiagnosticCollector, ErrorCode};
use turnscan::parser::{AstNode, TurnReport, parse_report};
use turnscan::section::{SectionContext, SectionOutput, parse_section};

use crate::helpers::source_fixtures::{CLAN_REPORT, LOCATION};

fn sections(input: &str) -> (Vec<SectionOutput>, DiagnosticCollector) {
    let parse = parse_report(input);
    let index = LineIndex::new(input);
    let root = TurnReport::cast(parse.syntax()).unwrap();
    let ctx = SectionContext::new(&index, TurnId::new(899, 12));
    let mut diagnostics = DiagnosticCollector::new();
    let outputs = root
        .sections()
        .map(|section| parse_section(&section, &ctx, &mut diagnostics))
        .collect();
    (outputs, diagnostics)
}

#[test]
fn test_clan_report_sections() {
    let (outputs, diagnostics) = sections(CLAN_REPORT);
    assert!(diagnostics.is_empty(), "{:?}", diagnostics.diagnostics());
    assert_eq!(outputs.len(), 3);
    assert_eq!(outputs[0].turn_infos.len(), 1);

    let tribe = outputs[0].moves.as_ref().unwrap();
    assert_eq!(tribe.steps.len(), 3);
    let first = &tribe.steps[0];
    assert_eq!(first.kind, MoveKind::Advance(Direction::NorthEast));
    assert_eq!(first.result, MoveResult::Succeeded);
    assert_eq!(first.line_no, 3);
    assert_eq!(first.step_no, 1);
    let report = first.report.as_ref().unwrap();
    assert_eq!(report.terrain, Some(Terrain::Prairie));
    assert_eq!(report.borders[0].direction, Direction::South);
    assert_eq!(report.borders[0].kind, BorderKind::Edge(Edge::River));

    let second = &tribe.steps[1];
    assert_eq!(second.step_no, 2);
    let far = &second.report.as_ref().unwrap().far_horizons;
    assert_eq!(far.len(), 2);
    assert_eq!(far[1].terrain, FarTerrain::Water);

    let status = &tribe.steps[2];
    assert_eq!(status.kind, MoveKind::Still);
    assert_eq!(status.line_no, 6);
    let report = status.report.as_ref().unwrap();
    assert_eq!(report.terrain, Some(Terrain::GrassyHills));
    assert!(report.encounters[0].friendly);

    assert_eq!(tribe.scouts.len(), 2);
    assert_eq!(tribe.scouts[0].index, 1);
    assert_eq!(tribe.scouts[0].steps.len(), 2);
    let scout_two = &tribe.scouts[1].steps[0];
    assert_eq!(scout_two.report.as_ref().unwrap().resources, vec![Resource::IronOre]);

    let courier = outputs[1].moves.as_ref().unwrap();
    assert!(matches!(courier.goes_to, Some(HexTarget::Hex(ref hex)) if hex.row_col() == Some("0405")));
    assert!(courier.steps.is_empty());

    let element = outputs[2].moves.as_ref().unwrap();
    assert_eq!(element.follows.as_ref().map(|u| u.as_str()), Some("0987"));
    assert!(element.current_hex.row_col() == Some("1304"));
}

#[test]
fn test_follows_beats_later_movement() {
    let input = format!("{LOCATION}Tribe Follows 0988\nTribe Goes to QQ 0405\nTribe Movement: Move NE-PR\n");
    let (outputs, diagnostics) = sections(&input);
    let moves = outputs[0].moves.as_ref().unwrap();
    assert_eq!(moves.follows.as_ref().map(|u| u.as_str()), Some("0988"));
    assert!(moves.goes_to.is_none());
    assert!(moves.steps.is_empty());

    let ignored: Vec<_> = diagnostics.diagnostics().iter().map(|d| (d.code, d.span.line)).collect();
    assert_eq!(ignored, vec![(ErrorCode::E0504, 3), (ErrorCode::E0504, 4)]);
    assert!(!diagnostics.has_errors());
}

#[test]
fn test_swamp_code_after_direction() {
    let input = format!("{LOCATION}Tribe Movement: Move SW-SW\n");
    let (outputs, diagnostics) = sections(&input);
    assert!(diagnostics.is_empty());
    let step = &outputs[0].moves.as_ref().unwrap().steps[0];
    assert_eq!(step.kind, MoveKind::Advance(Direction::SouthWest));
    assert_eq!(step.report.as_ref().unwrap().terrain, Some(Terrain::Swamp));
}

#[test]
fn test_failed_move_records_border() {
    let input = format!("{LOCATION}Tribe Movement: Move Can't Move on Ocean to N of HEX\n");
    let (outputs, _) = sections(&input);
    let step = &outputs[0].moves.as_ref().unwrap().steps[0];
    assert_eq!(step.result, MoveResult::Prohibited);
    assert!(step.result.is_failure());
    assert_eq!(step.reason, Some("terrain"));
    let border = &step.report.as_ref().unwrap().borders[0];
    assert_eq!(border.direction, Direction::North);
    assert_eq!(border.kind, BorderKind::Terrain(Terrain::Ocean));
}

#[test]
fn test_bad_step_costs_only_itself() {
    let input = format!("{LOCATION}Tribe Movement: Move NE-PR\\$$$\\SE-GH\n");
    let (outputs, diagnostics) = sections(&input);
    assert!(diagnostics.is_empty());
    let steps = &outputs[0].moves.as_ref().unwrap().steps;
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].step_no, 1);
    assert_eq!(steps[1].step_no, 3);
    assert_eq!(steps[1].kind, MoveKind::Advance(Direction::SouthEast));
}
