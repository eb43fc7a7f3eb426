//! AST values extracted from the CST.
//!
//! The types here are plain owned values: they never hold a `SyntaxNode`,
//! so they can outlive the tree and cross threads freely. Every extractor is
//! total. A subtree that went through error recovery still yields a value
//! carrying whatever text and span are available; reporting the problem is
//! left to the caller, which has the diagnostics from the parse.

mod extract;

use smol_str::SmolStr;

use crate::base::Span;
use crate::parser::SyntaxKind;

pub use extract::{
    extract_clause, extract_hex, extract_long_location, extract_step, extract_turn_info,
    extract_unit_id, extract_unit_location, extract_year_month,
};

// ============================================================================
// Tokens
// ============================================================================

/// A significant token copied out of the tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    pub kind: SyntaxKind,
    pub text: SmolStr,
    pub span: Span,
}

impl Word {
    pub fn is(&self, kind: SyntaxKind) -> bool {
        self.kind == kind
    }

    /// Case-insensitive text comparison
    pub fn eq_ignore_case(&self, text: &str) -> bool {
        self.text.eq_ignore_ascii_case(text)
    }
}

// ============================================================================
// Unit location
// ============================================================================

/// A unit id as written: `0987` or `0987c1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitIdExpr {
    pub text: SmolStr,
    pub span: Span,
}

/// A hex reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexLocation {
    /// `N/A`
    NotApplicable { span: Span },
    /// `## 0203`, grid hidden from the reporting unit
    Obscured { row_col: SmolStr, span: Span },
    /// `QQ 0203`
    Coords { grid: SmolStr, row_col: SmolStr, span: Span },
    /// Whatever was there when the reference did not parse
    Malformed { text: SmolStr, span: Span },
}

impl HexLocation {
    pub fn span(&self) -> Span {
        match self {
            Self::NotApplicable { span }
            | Self::Obscured { span, .. }
            | Self::Coords { span, .. }
            | Self::Malformed { span, .. } => *span,
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable { .. })
    }

    pub fn grid(&self) -> Option<&str> {
        match self {
            Self::Coords { grid, .. } => Some(grid),
            _ => None,
        }
    }

    pub fn row_col(&self) -> Option<&str> {
        match self {
            Self::Coords { row_col, .. } | Self::Obscured { row_col, .. } => Some(row_col),
            _ => None,
        }
    }
}

/// Which of the two locations on a unit line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Which {
    Current,
    Previous,
}

/// `Current Hex = QQ 0203`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LongLocation {
    pub which: Which,
    pub hex: HexLocation,
}

/// The line that opens a unit section
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitLocation {
    /// `Tribe`, `Courier`, `Element`, `Fleet` or `Garrison`
    pub unit_type: SmolStr,
    pub unit_id: UnitIdExpr,
    /// Free text between the first two commas, usually empty
    pub note: SmolStr,
    pub current: LongLocation,
    pub previous: LongLocation,
    pub span: Span,
}

// ============================================================================
// Turn header
// ============================================================================

/// Game year and month. Unparsable parts read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearMonth {
    pub year: u32,
    pub month: u32,
}

impl YearMonth {
    pub fn is_zero(&self) -> bool {
        self.year == 0 && self.month == 0
    }
}

/// Real-world date the report was produced, as written (day, month, year)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

/// `Current Turn 899-12 (#0), Winter, FINE Next Turn 900-01 (#1), 29/10/2023`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnInfo {
    pub current: YearMonth,
    /// The current year and month are missing or went through recovery
    pub malformed: bool,
    pub current_number: Option<u32>,
    pub season: Option<SmolStr>,
    pub weather: Option<SmolStr>,
    pub next: Option<(YearMonth, Option<u32>)>,
    pub report_date: Option<ReportDate>,
    pub span: Span,
}

// ============================================================================
// Steps
// ============================================================================

/// Snapshot of one `\`-separated step
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepText {
    pub clauses: Vec<ClauseText>,
    pub span: Span,
}

impl StepText {
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Snapshot of one comma-separated clause
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClauseText {
    /// Significant tokens outside groups and bad nodes, in order
    pub words: Vec<Word>,
    pub groups: Vec<GroupText>,
    /// Part of the clause was swallowed by error recovery
    pub bad: bool,
    pub text: SmolStr,
    pub span: Span,
}

impl ClauseText {
    /// Texts of the words, for phrase matching
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.text.as_str()).collect()
    }
}

/// Snapshot of a parenthesized group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupText {
    pub clauses: Vec<ClauseText>,
    pub closed: bool,
    pub span: Span,
}
