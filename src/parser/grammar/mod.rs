//! Grammar for turn reports
//!
//! The report is line oriented. Every physical line becomes one line node;
//! a unit location line opens a `UNIT_SECTION` that collects the lines after
//! it until the next location line. Modules:
//! - `location` - unit location lines, `Current Hex = ...`, hex references
//! - `turn_info` - the `Current Turn ...` header
//! - `directives` - movement, follows, goes to, scout, status and scry lines
//! - `steps` - the `\`-separated step lists those directives carry
//!
//! The parsing functions are generic over [`ReportParser`] so they can be
//! driven by any cursor implementation.

mod directives;
mod location;
mod steps;
mod turn_info;

use rowan::Checkpoint;

use super::errors::{Diagnostic, ErrorCode, ParseContext};
use super::lexer::Token;
use super::syntax_kind::SyntaxKind;
use crate::base::Span;

pub use directives::{
    parse_follows_line, parse_goes_to_line, parse_movement_line, parse_scout_line, parse_scry_line,
    parse_status_line, parse_text_line,
};
pub use location::{parse_hex_ref, parse_long_location, parse_unit_id_expr, parse_unit_location};
pub use steps::{parse_clause, parse_group, parse_step, parse_step_list};
pub use turn_info::parse_turn_info;

/// Unit type keywords that open location, movement, follows and goes-to lines
pub const UNIT_TYPE_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::TRIBE_KW,
    SyntaxKind::COURIER_KW,
    SyntaxKind::ELEMENT_KW,
    SyntaxKind::FLEET_KW,
    SyntaxKind::GARRISON_KW,
];

/// Tokens that can name a unit
pub const UNIT_ID_TOKENS: &[SyntaxKind] = &[SyntaxKind::NUMBER, SyntaxKind::UNIT_ID];

/// Line terminators
pub const LINE_END: &[SyntaxKind] = &[SyntaxKind::EOL, SyntaxKind::EOI];

/// Cursor and tree-building operations the grammar needs.
///
/// `at`/`at_any` test the current token, `consume*` bump on a match,
/// `accept*` bump and return the matched token, `expect*` accept or record a
/// diagnostic plus a zero-width `MISSING` node.
pub trait ReportParser<'a> {
    fn source(&self) -> &'a str;

    /// The current (lookahead) token
    fn current(&self) -> &Token<'a>;

    /// Token `n` positions ahead of the current one (0 is current)
    fn nth(&mut self, n: usize) -> &Token<'a>;

    /// Add the current token to the tree and advance
    fn bump(&mut self);

    fn accept(&mut self, kind: SyntaxKind) -> Option<Token<'a>>;
    fn accept_one_of(&mut self, kinds: &[SyntaxKind]) -> Option<Token<'a>>;

    /// Accept `kind` or record "expected ..." and a `MISSING` node
    fn expect(&mut self, kind: SyntaxKind) -> bool;

    /// Accept any of `kinds`, describing them as `expected` on failure
    fn expect_described(&mut self, kinds: &[SyntaxKind], expected: &str) -> bool;

    /// Wrap tokens up to (not including) a sync kind in a `BAD` node.
    /// Returns the span of what was skipped, or `None` if nothing was.
    fn skip_until_sync(&mut self, sync: &[SyntaxKind]) -> Option<Span>;

    /// Open the root node. The first token's leading trivia lands inside it.
    fn start_root(&mut self, kind: SyntaxKind);
    fn start_node(&mut self, kind: SyntaxKind);
    fn finish_node(&mut self);
    fn checkpoint(&mut self) -> Checkpoint;
    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind);

    fn error(&mut self, diagnostic: Diagnostic);
    fn error_at_current(&mut self, code: ErrorCode, message: String);

    fn push_context(&mut self, context: ParseContext);
    fn pop_context(&mut self);
    fn context(&self) -> ParseContext;

    // -----------------------------------------------------------------
    // Provided helpers
    // -----------------------------------------------------------------

    fn current_kind(&self) -> SyntaxKind {
        self.current().kind
    }

    fn current_text(&self) -> &'a str {
        self.current().text
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    fn at_line_end(&self) -> bool {
        self.current_kind().is_line_end()
    }

    fn nth_kind(&mut self, n: usize) -> SyntaxKind {
        self.nth(n).kind
    }

    fn nth_text(&mut self, n: usize) -> &'a str {
        self.nth(n).text
    }

    /// Bump if the current token is `kind`
    fn consume(&mut self, kind: SyntaxKind) -> bool {
        self.accept(kind).is_some()
    }

    /// Bump if the current token is any of `kinds`
    fn consume_one_of(&mut self, kinds: &[SyntaxKind]) -> bool {
        self.accept_one_of(kinds).is_some()
    }

    /// Check for a plain word with the given text, e.g. `at` in scry lines
    fn at_text(&self, text: &str) -> bool {
        self.current_kind().is_word() && self.current_text() == text
    }

    /// Record an error for the rest of the line and wrap it in `BAD`.
    fn recover_line(&mut self) {
        self.skip_until_sync(LINE_END);
    }

    /// Finish a line: consume `EOL`, or report trailing input first.
    fn expect_line_end(&mut self) {
        if !self.at_line_end() {
            let found = self.current_kind().display_name();
            let message = format!("unexpected {} {}", found, self.context().description());
            self.error_at_current(ErrorCode::E0204, message);
            self.recover_line();
        }
        self.consume(SyntaxKind::EOL);
    }

    /// Skip the rest of a line after an error was already recorded.
    fn abandon_line(&mut self) {
        self.recover_line();
        self.consume(SyntaxKind::EOL);
    }
}

/// Shapes a line can take, decided from its first few tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    UnitLocation,
    TurnInfo,
    Movement,
    Follows,
    GoesTo,
    Scout,
    Status,
    Scry,
    Blank,
    Text,
}

/// Decide the shape of the line starting at the current token.
pub fn classify_line<'a, P: ReportParser<'a>>(p: &mut P) -> LineShape {
    let first = p.current_kind();
    match first {
        SyntaxKind::EOL => LineShape::Blank,
        kind if kind.is_unit_type() => match p.nth_kind(1) {
            SyntaxKind::NUMBER | SyntaxKind::UNIT_ID if p.nth_kind(2) == SyntaxKind::COMMA => {
                LineShape::UnitLocation
            }
            SyntaxKind::MOVEMENT_KW => LineShape::Movement,
            SyntaxKind::FOLLOWS_KW => LineShape::Follows,
            SyntaxKind::GOES_KW => LineShape::GoesTo,
            _ => LineShape::Text,
        },
        SyntaxKind::WIND
            if p.nth_kind(1) == SyntaxKind::DIRECTION
                && p.nth_kind(2).is_unit_type()
                && p.nth_kind(3) == SyntaxKind::MOVEMENT_KW =>
        {
            LineShape::Movement
        }
        SyntaxKind::CURRENT_KW if p.nth_kind(1) == SyntaxKind::TURN_KW => LineShape::TurnInfo,
        SyntaxKind::SCOUT_KW if p.nth_kind(1) == SyntaxKind::NUMBER => LineShape::Scout,
        SyntaxKind::NUMBER | SyntaxKind::UNIT_ID if p.nth_kind(1) == SyntaxKind::STATUS_KW => LineShape::Status,
        SyntaxKind::SCRY_KW => LineShape::Scry,
        _ => LineShape::Text,
    }
}

/// TurnReport = Line* EOI, with unit sections wrapping location lines and
/// the lines that follow them.
pub fn parse_turn_report<'a, P: ReportParser<'a>>(p: &mut P) {
    p.start_root(SyntaxKind::TURN_REPORT);
    let mut in_section = false;

    while !p.at(SyntaxKind::EOI) {
        let shape = classify_line(p);
        if shape == LineShape::UnitLocation {
            if in_section {
                p.finish_node();
            }
            p.start_node(SyntaxKind::UNIT_SECTION);
            in_section = true;
        }
        parse_line(p, shape);
    }

    if in_section {
        p.finish_node();
    }
    p.bump(); // EOI
    p.finish_node();
}

/// Parse one line of the given shape, including its `EOL`.
pub fn parse_line<'a, P: ReportParser<'a>>(p: &mut P, shape: LineShape) {
    tracing::trace!(?shape, line = p.current().span.line, "parsing line");
    match shape {
        LineShape::UnitLocation => parse_unit_location(p),
        LineShape::TurnInfo => parse_turn_info(p),
        LineShape::Movement => parse_movement_line(p),
        LineShape::Follows => parse_follows_line(p),
        LineShape::GoesTo => parse_goes_to_line(p),
        LineShape::Scout => parse_scout_line(p),
        LineShape::Status => parse_status_line(p),
        LineShape::Scry => parse_scry_line(p),
        LineShape::Blank => {
            p.start_node(SyntaxKind::BLANK_LINE);
            p.bump();
            p.finish_node();
        }
        LineShape::Text => parse_text_line(p),
    }
}

/// Check for a two-letter upper-case grid label such as `QQ`
pub fn is_grid_label(kind: SyntaxKind, text: &str) -> bool {
    kind.is_word() && text.len() == 2 && text.bytes().all(|b| b.is_ascii_uppercase())
}
