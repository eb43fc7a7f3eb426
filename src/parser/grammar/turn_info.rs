//! The `Current Turn` header line
//!
//! ```text
//! TurnInfo   = Current Turn YearMonth TurnNumber ("," SEASON "," WEATHER)? NextTurn? EOL
//! NextTurn   = Next Turn YearMonth TurnNumber ("," ReportDate)?
//! YearMonth  = NUMBER "-" NUMBER
//! TurnNumber = "(" "#" NUMBER ")"
//! ReportDate = NUMBER "/" NUMBER "/" NUMBER
//! ```

use super::ReportParser;
use crate::parser::SyntaxKind;
use crate::parser::errors::{Diagnostic, ErrorCode, ParseContext};

/// TURN_INFO line
pub fn parse_turn_info<'a, P: ReportParser<'a>>(p: &mut P) {
    p.start_node(SyntaxKind::TURN_INFO);
    p.push_context(ParseContext::TurnInfo);

    match turn_info_body(p) {
        Some(()) => p.expect_line_end(),
        None => p.abandon_line(),
    }

    p.pop_context();
    p.finish_node();
}

fn turn_info_body<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.bump(); // Current
    p.bump(); // Turn
    parse_year_month(p)?;
    parse_turn_number(p)?;

    if p.at(SyntaxKind::COMMA) {
        p.bump();
        p.expect(SyntaxKind::SEASON).then_some(())?;
        p.expect(SyntaxKind::COMMA).then_some(())?;
        p.expect(SyntaxKind::WEATHER).then_some(())?;
    }

    if p.at(SyntaxKind::NEXT_KW) {
        parse_next_turn(p)?;
    }
    Some(())
}

fn parse_next_turn<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.start_node(SyntaxKind::NEXT_TURN);
    let ok = next_turn_body(p);
    p.finish_node();
    ok
}

fn next_turn_body<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.bump(); // Next
    p.expect(SyntaxKind::TURN_KW).then_some(())?;
    parse_year_month(p)?;
    parse_turn_number(p)?;
    if p.consume(SyntaxKind::COMMA) {
        p.start_node(SyntaxKind::REPORT_DATE);
        let ok = report_date_body(p);
        p.finish_node();
        return ok;
    }
    Some(())
}

fn report_date_body<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.expect(SyntaxKind::NUMBER).then_some(())?;
    p.expect(SyntaxKind::SLASH).then_some(())?;
    p.expect(SyntaxKind::NUMBER).then_some(())?;
    p.expect(SyntaxKind::SLASH).then_some(())?;
    p.expect(SyntaxKind::NUMBER).then_some(())
}

fn parse_year_month<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.start_node(SyntaxKind::YEAR_MONTH);
    let ok = year_month_body(p);
    p.finish_node();
    ok
}

/// `0-0` is left alone: it is the zero-turn case, reported by the caller.
fn year_month_body<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    let year = p.current_text();
    p.expect_described(&[SyntaxKind::NUMBER], "year").then_some(())?;
    p.expect(SyntaxKind::DASH).then_some(())?;
    let month = p.current().clone();
    p.expect_described(&[SyntaxKind::NUMBER], "month").then_some(())?;

    let month_value = month.text.parse::<u32>().ok();
    let in_range = month_value.is_some_and(|m| (1..=12).contains(&m));
    let zero_turn = month_value == Some(0) && year.parse::<u32>().ok() == Some(0);
    if !in_range && !zero_turn {
        p.error(Diagnostic::error(
            ErrorCode::E0303,
            format!("month {} is out of range in turn header", month.text),
            month.span,
        ));
    }
    Some(())
}

fn parse_turn_number<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.start_node(SyntaxKind::TURN_NUMBER);
    let ok = p.expect(SyntaxKind::L_PAREN)
        && p.expect(SyntaxKind::HASH)
        && p.expect_described(&[SyntaxKind::NUMBER], "turn number")
        && p.expect(SyntaxKind::R_PAREN);
    p.finish_node();
    ok.then_some(())
}

#[cfg(test)]
mod tests {
    use crate::parser::errors::ErrorCode;
    use crate::parser::{SyntaxKind, parse_report};

    #[test]
    fn test_full_header() {
        let parse = parse_report("Current Turn 899-12 (#0), Winter, FINE\tNext Turn 900-01 (#1), 29/10/2023\n");
        assert!(parse.errors.is_empty(), "{:?}", parse.errors);
        let info = parse.syntax().first_child().expect("turn info");
        assert_eq!(info.kind(), SyntaxKind::TURN_INFO);
        let kinds: Vec<_> = info.children().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![SyntaxKind::YEAR_MONTH, SyntaxKind::TURN_NUMBER, SyntaxKind::NEXT_TURN]
        );
    }

    #[test]
    fn test_short_header() {
        let parse = parse_report("Current Turn 901-03 (#15)\n");
        assert!(parse.errors.is_empty(), "{:?}", parse.errors);
    }

    #[test]
    fn test_header_missing_dash() {
        let parse = parse_report("Current Turn 899 12 (#0)\n");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].code, ErrorCode::E0202);
        assert_eq!(parse.errors[0].message, "expected '-' in turn header, found number");
    }

    #[test]
    fn test_header_month_out_of_range() {
        let parse = parse_report("Current Turn 899-13 (#0)\n");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].code, ErrorCode::E0303);
        assert_eq!(parse.errors[0].message, "month 13 is out of range in turn header");
        assert_eq!(parse.errors[0].span.column, 18);

        assert!(parse_report("Current Turn 0-0 (#0)\n").errors.is_empty());
    }
}
