//! Directive lines: movement, follows, goes to, scout, status and scry
//!
//! ```text
//! Movement    = (WIND DIRECTION)? UnitType Movement ":" Move StepList EOL
//! Follows     = UnitType Follows UnitId EOL
//! GoesTo      = UnitType Goes To (HexRef | Word+) EOL
//! ScoutLine   = Scout NUMBER ":" Scout StepList EOL
//! StatusLine  = UnitId Status ":" StepList EOL
//! ScryLine    = Scry Word "at" HexRef ":" ScryPayload EOL
//! ScryPayload = Move StepList | Scout NUMBER ":" Scout StepList | StepList
//! ```

use super::location::{at_hex_ref, parse_hex_ref, parse_unit_id_expr};
use super::steps::parse_step_list;
use super::{LINE_END, ReportParser};
use crate::parser::SyntaxKind;
use crate::parser::errors::ParseContext;

/// Run `body` inside a line node of `kind`, finishing the line either
/// normally or by skipping what is left of it.
fn line<'a, P, F>(p: &mut P, kind: SyntaxKind, context: ParseContext, body: F)
where
    P: ReportParser<'a>,
    F: FnOnce(&mut P) -> Option<()>,
{
    p.start_node(kind);
    p.push_context(context);
    match body(p) {
        Some(()) => p.expect_line_end(),
        None => p.abandon_line(),
    }
    p.pop_context();
    p.finish_node();
}

/// MOVEMENT_LINE, optionally prefixed with fleet winds
pub fn parse_movement_line<'a, P: ReportParser<'a>>(p: &mut P) {
    line(p, SyntaxKind::MOVEMENT_LINE, ParseContext::Movement, |p| {
        if p.at(SyntaxKind::WIND) {
            p.start_node(SyntaxKind::WINDS);
            p.bump();
            p.bump(); // direction, checked by the line classifier
            p.finish_node();
        }
        p.bump(); // unit type
        p.bump(); // Movement
        p.expect(SyntaxKind::COLON).then_some(())?;
        p.expect(SyntaxKind::MOVE_KW).then_some(())?;
        parse_step_list(p);
        Some(())
    });
}

/// FOLLOWS_LINE
pub fn parse_follows_line<'a, P: ReportParser<'a>>(p: &mut P) {
    line(p, SyntaxKind::FOLLOWS_LINE, ParseContext::Follows, |p| {
        p.bump(); // unit type
        p.bump(); // Follows
        parse_unit_id_expr(p)
    });
}

/// GOES_TO_LINE with a hex reference or a named hex
pub fn parse_goes_to_line<'a, P: ReportParser<'a>>(p: &mut P) {
    line(p, SyntaxKind::GOES_TO_LINE, ParseContext::GoesTo, |p| {
        p.bump(); // unit type
        p.bump(); // Goes
        p.expect(SyntaxKind::TO_KW).then_some(())?;
        if at_hex_ref(p) {
            return parse_hex_ref(p);
        }
        if p.at_any(LINE_END) {
            return p.expect_described(&[], "hex reference or hex name").then_some(());
        }
        p.start_node(SyntaxKind::GOES_TO_NAME);
        while !p.at_any(LINE_END) {
            p.bump();
        }
        p.finish_node();
        Some(())
    });
}

/// SCOUT_LINE
pub fn parse_scout_line<'a, P: ReportParser<'a>>(p: &mut P) {
    line(p, SyntaxKind::SCOUT_LINE, ParseContext::Scout, |p| scout_body(p));
}

fn scout_body<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.expect(SyntaxKind::SCOUT_KW).then_some(())?;
    p.expect_described(&[SyntaxKind::NUMBER], "scout number").then_some(())?;
    p.expect(SyntaxKind::COLON).then_some(())?;
    p.expect(SyntaxKind::SCOUT_KW).then_some(())?;
    parse_step_list(p);
    Some(())
}

/// STATUS_LINE
pub fn parse_status_line<'a, P: ReportParser<'a>>(p: &mut P) {
    line(p, SyntaxKind::STATUS_LINE, ParseContext::Status, |p| {
        parse_unit_id_expr(p)?;
        p.bump(); // Status
        p.expect(SyntaxKind::COLON).then_some(())?;
        parse_step_list(p);
        Some(())
    });
}

/// SCRY_LINE
pub fn parse_scry_line<'a, P: ReportParser<'a>>(p: &mut P) {
    line(p, SyntaxKind::SCRY_LINE, ParseContext::Scry, |p| {
        p.bump(); // Scry
        if !p.current_kind().is_word() {
            return p.expect_described(&[], "scry kind").then_some(());
        }
        p.bump();
        if !p.at_text("at") {
            return p.expect_described(&[], "'at'").then_some(());
        }
        p.bump();
        parse_hex_ref(p)?;
        p.expect(SyntaxKind::COLON).then_some(())?;
        parse_scry_payload(p)
    });
}

fn parse_scry_payload<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.start_node(SyntaxKind::SCRY_PAYLOAD);
    let ok = if p.at(SyntaxKind::MOVE_KW) {
        p.bump();
        parse_step_list(p);
        Some(())
    } else if p.at(SyntaxKind::SCOUT_KW) && p.nth_kind(1) == SyntaxKind::NUMBER {
        scout_body(p)
    } else {
        parse_step_list(p);
        Some(())
    };
    p.finish_node();
    ok
}

/// TEXT_LINE: any line the grammar does not interpret. Never reports.
pub fn parse_text_line<'a, P: ReportParser<'a>>(p: &mut P) {
    p.start_node(SyntaxKind::TEXT_LINE);
    while !p.at_any(LINE_END) {
        p.bump();
    }
    p.consume(SyntaxKind::EOL);
    p.finish_node();
}
