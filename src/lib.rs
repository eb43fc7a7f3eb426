//! # turnscan-base
//!
//! Core library for reading play-by-mail turn reports: a lossless parser,
//! value extraction and the unit movement grammar.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! turn      → Turn assembly, fatal header errors, parallel batches
//!   ↓
//! section   → Unit section grammar: steps, observations, directives
//!   ↓
//! model     → Domain values: TurnId, UnitId, Terrain, Moves, Report
//!   ↓
//! syntax    → Owned values extracted from the CST
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, diagnostics
//!   ↓
//! base      → Primitives (Span, LineIndex, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use turnscan::{ParseOptions, parse_turn};
//!
//! let report = "\
//! Tribe 0987, , Current Hex = QQ 0203, (Previous Hex = QQ 0101)
//! Current Turn 899-12 (#0), Winter, FINE
//! Tribe Movement: Move NE-PR\\SE-GH
//! ";
//! let output = parse_turn(report, &ParseOptions::default()).unwrap();
//! assert_eq!(output.turn.id.to_string(), "0899-12");
//! assert_eq!(output.turn.unit("0987").unwrap().steps.len(), 2);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → model → section → turn)
// ============================================================================

/// Foundation types: Span, LineIndex, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, diagnostics
pub mod parser;

/// Syntax: owned values read out of the CST
pub mod syntax;

/// Domain model of a parsed turn
pub mod model;

/// Unit section grammar
pub mod section;

/// Turn assembly
pub mod turn;

// Re-export commonly needed items
pub use parser::keywords;
pub use parser::errors::{Diagnostic, ErrorCode, Severity};

// Re-export foundation types
pub use base::{LineCol, LineIndex, Span, TextRange, TextSize};

pub use model::{Move, MoveKind, MoveResult, Moves, Report, Turn, TurnId, UnitId};
pub use turn::{ParseError, ParseOptions, TurnOutput, parse_many, parse_turn, parse_turn_bytes};
