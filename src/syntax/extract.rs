//! CST → AST value extraction

use smol_str::SmolStr;

use super::{
    ClauseText, GroupText, HexLocation, LongLocation, ReportDate, StepText, TurnInfo, UnitIdExpr,
    UnitLocation, Which, Word, YearMonth,
};
use crate::base::{LineIndex, Span};
use crate::parser::{self, AstNode, ClausePart, SyntaxNode, SyntaxToken};

fn span_of(node: &SyntaxNode, index: &LineIndex) -> Span {
    Span::from_range(node.text_range(), index)
}

fn word(token: &SyntaxToken, index: &LineIndex) -> Word {
    Word {
        kind: token.kind(),
        text: SmolStr::new(token.text()),
        span: Span::from_range(token.text_range(), index),
    }
}

fn trimmed_text(node: &SyntaxNode) -> SmolStr {
    SmolStr::new(node.text().to_string().trim())
}

fn number(token: Option<SyntaxToken>) -> Option<u32> {
    token.and_then(|t| t.text().parse().ok())
}

/// The point just past the node, where a missing part would have gone
fn end_of(node: &SyntaxNode, index: &LineIndex) -> Span {
    let end = node.text_range().end();
    let lc = index.line_col(end);
    Span::empty_at(end.into(), lc.line, lc.column)
}

pub fn extract_unit_id(node: &parser::UnitIdExpr, index: &LineIndex) -> UnitIdExpr {
    UnitIdExpr {
        text: trimmed_text(node.syntax()),
        span: span_of(node.syntax(), index),
    }
}

pub fn extract_hex(node: &parser::HexRef, index: &LineIndex) -> HexLocation {
    let span = span_of(node.syntax(), index);
    if parser::has_degenerate_descendant(node.syntax()) {
        return HexLocation::Malformed {
            text: trimmed_text(node.syntax()),
            span,
        };
    }
    if node.is_not_applicable() {
        return HexLocation::NotApplicable { span };
    }
    let row_col = node.row_col().map(|t| SmolStr::new(t.text())).unwrap_or_default();
    if node.is_obscured() {
        return HexLocation::Obscured { row_col, span };
    }
    match node.grid() {
        Some(grid) => HexLocation::Coords {
            grid: SmolStr::new(grid.text()),
            row_col,
            span,
        },
        None => HexLocation::Malformed {
            text: trimmed_text(node.syntax()),
            span,
        },
    }
}

pub fn extract_long_location(node: &parser::LongLocation, index: &LineIndex) -> LongLocation {
    let which = if node.is_previous() {
        Which::Previous
    } else {
        Which::Current
    };
    let hex = match node.hex() {
        Some(hex) => extract_hex(&hex, index),
        None => HexLocation::Malformed {
            text: trimmed_text(node.syntax()),
            span: span_of(node.syntax(), index),
        },
    };
    LongLocation { which, hex }
}

fn missing_location(which: Which, at: Span) -> LongLocation {
    LongLocation {
        which,
        hex: HexLocation::Malformed {
            text: SmolStr::default(),
            span: at,
        },
    }
}

pub fn extract_unit_location(node: &parser::UnitLocation, index: &LineIndex) -> UnitLocation {
    let at_end = end_of(node.syntax(), index);
    let unit_id = match node.unit_id() {
        Some(id) => extract_unit_id(&id, index),
        None => UnitIdExpr {
            text: SmolStr::default(),
            span: at_end,
        },
    };
    UnitLocation {
        unit_type: node
            .unit_type()
            .map(|t| SmolStr::new(t.text()))
            .unwrap_or_default(),
        unit_id,
        note: node.note().map(|n| SmolStr::new(n.text())).unwrap_or_default(),
        current: node
            .current()
            .map(|l| extract_long_location(&l, index))
            .unwrap_or_else(|| missing_location(Which::Current, at_end)),
        previous: node
            .previous()
            .map(|l| extract_long_location(&l, index))
            .unwrap_or_else(|| missing_location(Which::Previous, at_end)),
        span: span_of(node.syntax(), index),
    }
}

pub fn extract_year_month(node: &parser::YearMonth) -> YearMonth {
    YearMonth {
        year: number(node.year()).unwrap_or(0),
        month: number(node.month()).unwrap_or(0),
    }
}

pub fn extract_turn_info(node: &parser::TurnInfo, index: &LineIndex) -> TurnInfo {
    let next = node.next_turn();
    let report_date = next.as_ref().and_then(|n| n.report_date()).and_then(|date| {
        match date.parts().as_slice() {
            [day, month, year] => Some(ReportDate {
                day: day.text().parse().ok()?,
                month: month.text().parse().ok()?,
                year: year.text().parse().ok()?,
            }),
            _ => None,
        }
    });
    TurnInfo {
        current: node.year_month().map(|ym| extract_year_month(&ym)).unwrap_or_default(),
        malformed: node.year_month().is_none_or(|ym| ym.is_damaged()),
        current_number: node.turn_number().and_then(|n| number(n.number())),
        season: node.season().map(|t| SmolStr::new(t.text())),
        weather: node.weather().map(|t| SmolStr::new(t.text())),
        next: next.as_ref().map(|n| {
            (
                n.year_month().map(|ym| extract_year_month(&ym)).unwrap_or_default(),
                n.turn_number().and_then(|t| number(t.number())),
            )
        }),
        report_date,
        span: span_of(node.syntax(), index),
    }
}

pub fn extract_clause(node: &parser::Clause, index: &LineIndex) -> ClauseText {
    let mut words = Vec::new();
    let mut groups = Vec::new();
    let mut bad = false;
    for part in node.elements() {
        match part {
            ClausePart::Token(token) => words.push(word(&token, index)),
            ClausePart::Group(group) => groups.push(GroupText {
                clauses: group.clauses().map(|c| extract_clause(&c, index)).collect(),
                closed: group.is_closed(),
                span: span_of(group.syntax(), index),
            }),
            ClausePart::Bad(_) => bad = true,
        }
    }
    ClauseText {
        words,
        groups,
        bad,
        text: SmolStr::new(node.text()),
        span: span_of(node.syntax(), index),
    }
}

pub fn extract_step(node: &parser::Step, index: &LineIndex) -> StepText {
    StepText {
        clauses: node.clauses().map(|c| extract_clause(&c, index)).collect(),
        span: span_of(node.syntax(), index),
    }
}
