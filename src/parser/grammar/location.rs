//! Unit location lines and hex references
//!
//! ```text
//! UnitLocation = UnitType UnitId "," Note "," LongLocation "," "(" LongLocation ")" EOL
//! LongLocation = (Current | Previous) Hex "=" HexRef
//! HexRef       = Grid RowColumn | "N" "/" "A" | "##" RowColumn
//! ```

use super::{LINE_END, ReportParser, UNIT_ID_TOKENS, is_grid_label};
use crate::parser::SyntaxKind;
use crate::parser::errors::{Diagnostic, ErrorCode, ParseContext};

/// UnitLocation line. Opens a unit section.
pub fn parse_unit_location<'a, P: ReportParser<'a>>(p: &mut P) {
    p.start_node(SyntaxKind::UNIT_LOCATION);
    p.push_context(ParseContext::UnitLocation);

    match unit_location_body(p) {
        Some(()) => p.expect_line_end(),
        None => p.abandon_line(),
    }

    p.pop_context();
    p.finish_node();
}

fn unit_location_body<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    // Unit type keyword, already checked by the line classifier
    p.bump();
    parse_unit_id_expr(p)?;
    p.expect(SyntaxKind::COMMA).then_some(())?;
    parse_note(p);
    p.expect(SyntaxKind::COMMA).then_some(())?;
    parse_long_location(p)?;
    p.expect(SyntaxKind::COMMA).then_some(())?;
    p.expect(SyntaxKind::L_PAREN).then_some(())?;
    parse_long_location(p)?;
    p.expect(SyntaxKind::R_PAREN).then_some(())
}

/// UNIT_ID_EXPR wrapping a bare number or a suffixed unit id
pub fn parse_unit_id_expr<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.start_node(SyntaxKind::UNIT_ID_EXPR);
    let ok = p.expect_described(UNIT_ID_TOKENS, "unit id");
    p.finish_node();
    ok.then_some(())
}

/// Free text between the first two commas. May be empty.
fn parse_note<'a, P: ReportParser<'a>>(p: &mut P) {
    p.start_node(SyntaxKind::NOTE);
    while !p.at(SyntaxKind::COMMA) && !p.at_any(LINE_END) {
        p.bump();
    }
    p.finish_node();
}

/// `Current Hex = QQ 0203` or `Previous Hex = N/A`
pub fn parse_long_location<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.start_node(SyntaxKind::LONG_LOCATION);
    p.push_context(ParseContext::Location);
    let ok = long_location_body(p);
    p.pop_context();
    p.finish_node();
    ok
}

fn long_location_body<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.expect_described(&[SyntaxKind::CURRENT_KW, SyntaxKind::PREVIOUS_KW], "'Current' or 'Previous'")
        .then_some(())?;
    p.expect(SyntaxKind::HEX_KW).then_some(())?;
    p.expect(SyntaxKind::EQUALS).then_some(())?;
    parse_hex_ref(p)
}

/// Check whether the current token starts a hex reference
pub fn at_hex_ref<'a, P: ReportParser<'a>>(p: &mut P) -> bool {
    let kind = p.current_kind();
    if kind == SyntaxKind::HASH_HASH {
        return true;
    }
    if p.current_text() == "N" && p.nth_kind(1) == SyntaxKind::SLASH {
        return true;
    }
    is_grid_label(kind, p.current_text()) && p.nth_kind(1) == SyntaxKind::NUMBER
}

/// HEX_REF node
pub fn parse_hex_ref<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    p.start_node(SyntaxKind::HEX_REF);
    let ok = hex_ref_body(p);
    p.finish_node();
    ok
}

fn hex_ref_body<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    if p.at(SyntaxKind::HASH_HASH) {
        // Obscured grid: `## 0203`
        p.bump();
        return parse_row_column(p);
    }

    if p.current_text() == "N" && p.nth_kind(1) == SyntaxKind::SLASH {
        p.bump();
        p.bump();
        if p.current_kind().is_word() && p.current_text() == "A" {
            p.bump();
            return Some(());
        }
        return p.expect_described(&[], "'A' of 'N/A'").then_some(());
    }

    let kind = p.current_kind();
    if is_grid_label(kind, p.current_text()) {
        p.bump();
        return parse_row_column(p);
    }

    p.expect_described(&[], "hex reference").then_some(())
}

/// Four-digit row/column number. A number of the wrong width is kept but
/// reported.
fn parse_row_column<'a, P: ReportParser<'a>>(p: &mut P) -> Option<()> {
    let token = p.current().clone();
    if !p.expect_described(&[SyntaxKind::NUMBER], "row and column") {
        return None;
    }
    if token.text.len() != 4 {
        p.error(
            Diagnostic::error(
                ErrorCode::E0302,
                format!("row and column should be 4 digits, found '{}'", token.text),
                token.span,
            )
            .with_note("hex references look like 'QQ 0203'"),
        );
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use crate::parser::{SyntaxKind, parse_report};

    #[test]
    fn test_unit_location_line_is_clean() {
        let parse = parse_report("Tribe 0987, , Current Hex = QQ 0203, (Previous Hex = QQ 0101)\n");
        assert!(parse.errors.is_empty(), "{:?}", parse.errors);
        let root = parse.syntax();
        let section = root.first_child().expect("section");
        assert_eq!(section.kind(), SyntaxKind::UNIT_SECTION);
        let location = section.first_child().expect("location");
        assert_eq!(location.kind(), SyntaxKind::UNIT_LOCATION);
        let hexes = location
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::HEX_REF)
            .count();
        assert_eq!(hexes, 2);
    }

    #[test]
    fn test_not_applicable_and_obscured_hexes() {
        let parse = parse_report("Tribe 0987, , Current Hex = ## 1304, (Previous Hex = N/A)\n");
        assert!(parse.errors.is_empty(), "{:?}", parse.errors);
    }

    #[test]
    fn test_short_row_column_is_reported() {
        let parse = parse_report("Tribe 0987, , Current Hex = QQ 203, (Previous Hex = N/A)\n");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].code, crate::parser::errors::ErrorCode::E0302);
    }

    #[test]
    fn test_missing_equals_gives_one_error_and_bad_rest() {
        let parse = parse_report("Tribe 0987, , Current Hex QQ 0203, (Previous Hex = N/A)\nnext\n");
        assert_eq!(parse.errors.len(), 1);
        let root = parse.syntax();
        assert!(root.descendants().any(|n| n.kind() == SyntaxKind::MISSING));
        assert!(root.descendants().any(|n| n.kind() == SyntaxKind::BAD));
        assert!(root.descendants().any(|n| n.kind() == SyntaxKind::TEXT_LINE));
    }
}
