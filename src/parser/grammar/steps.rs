//! Step lists carried by movement, scout, status and scry lines
//!
//! ```text
//! StepList = Step ("\" Step)*
//! Step     = Clause? ("," Clause?)*
//! Clause   = (Group | token)+          tokens up to `,` `\` or end of line
//! Group    = "(" Clause ("," Clause)* ")"
//! ```
//!
//! Errors inside a clause never escape it: a clause that starts with a token
//! no clause can start with is wrapped in `BAD` up to the next `,` or `\`,
//! and the steps around it are unaffected.

use super::ReportParser;
use crate::parser::SyntaxKind;
use crate::parser::errors::{Diagnostic, ErrorCode, ParseContext};

/// Tokens that can never begin a clause
pub const CLAUSE_START_INVALID: &[SyntaxKind] = &[
    SyntaxKind::UNKNOWN,
    SyntaxKind::EQUALS,
    SyntaxKind::STAR,
    SyntaxKind::DOLLAR,
    SyntaxKind::PLUS,
    SyntaxKind::R_PAREN,
    SyntaxKind::HASH,
    SyntaxKind::COLON,
    SyntaxKind::SLASH,
    SyntaxKind::PERIOD,
];

const STEP_CLAUSE_END: &[SyntaxKind] = &[
    SyntaxKind::COMMA,
    SyntaxKind::BACKSLASH,
    SyntaxKind::EOL,
    SyntaxKind::EOI,
];

const GROUP_CLAUSE_END: &[SyntaxKind] = &[
    SyntaxKind::COMMA,
    SyntaxKind::R_PAREN,
    SyntaxKind::BACKSLASH,
    SyntaxKind::EOL,
    SyntaxKind::EOI,
];

fn clause_end<'a, P: ReportParser<'a>>(p: &P) -> &'static [SyntaxKind] {
    match p.context() {
        ParseContext::Group => GROUP_CLAUSE_END,
        _ => STEP_CLAUSE_END,
    }
}

/// STEP_LIST: always consumes up to the end of the line
pub fn parse_step_list<'a, P: ReportParser<'a>>(p: &mut P) {
    p.start_node(SyntaxKind::STEP_LIST);
    p.push_context(ParseContext::Steps);
    parse_step(p);
    while p.consume(SyntaxKind::BACKSLASH) {
        parse_step(p);
    }
    p.pop_context();
    p.finish_node();
}

/// STEP: comma separated clauses, any of which may be empty
pub fn parse_step<'a, P: ReportParser<'a>>(p: &mut P) {
    p.start_node(SyntaxKind::STEP);
    loop {
        if !p.at_any(STEP_CLAUSE_END) {
            parse_clause(p);
        }
        if !p.consume(SyntaxKind::COMMA) {
            break;
        }
    }
    p.finish_node();
}

/// CLAUSE: a group or a run of tokens
pub fn parse_clause<'a, P: ReportParser<'a>>(p: &mut P) {
    p.start_node(SyntaxKind::CLAUSE);

    if p.at_any(CLAUSE_START_INVALID) {
        let found = p.current_kind().display_name();
        let message = format!("a clause cannot start with {found}");
        p.error_at_current(ErrorCode::E0401, message);
        let recovery = p.context().recovery_tokens();
        p.skip_until_sync(recovery);
        p.finish_node();
        return;
    }

    let end = clause_end(p);
    while !p.at_any(end) {
        match p.current_kind() {
            SyntaxKind::L_PAREN => parse_group(p),
            SyntaxKind::UNKNOWN => {
                let token = p.current().clone();
                p.error(Diagnostic::error(
                    ErrorCode::E0101,
                    format!("unexpected character {:?}", token.text),
                    token.span,
                ));
                let checkpoint = p.checkpoint();
                p.bump();
                p.start_node_at(checkpoint, SyntaxKind::BAD);
                p.finish_node();
            }
            _ => p.bump(),
        }
    }

    p.finish_node();
}

/// GROUP: parenthesized clauses, e.g. far horizon sightings
pub fn parse_group<'a, P: ReportParser<'a>>(p: &mut P) {
    p.start_node(SyntaxKind::GROUP);
    p.push_context(ParseContext::Group);
    let open = p.current().span;
    p.bump(); // (

    loop {
        if !p.at_any(GROUP_CLAUSE_END) {
            parse_clause(p);
        }
        if !p.consume(SyntaxKind::COMMA) {
            break;
        }
    }

    if !p.consume(SyntaxKind::R_PAREN) {
        p.error(
            Diagnostic::error(ErrorCode::E0203, "unclosed '('", open)
                .with_note(format!("the group ends at {}", p.current_kind().display_name())),
        );
    }

    p.pop_context();
    p.finish_node();
}
