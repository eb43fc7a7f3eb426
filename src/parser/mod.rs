//! Lossless parser for turn reports
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! We build a lossless CST that preserves all whitespace and line endings,
//! then read it through a typed AST layer.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind and leading trivia
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! syntax / section → values and unit moves
//! ```
//!
//! ## Error recovery
//!
//! The parser never fails. A line that does not match its shape gets one
//! diagnostic, a zero-width `MISSING` node where input was expected and a
//! `BAD` node around whatever was skipped; parsing resumes at the next line
//! (or, inside a step list, at the next `,` or `\`).

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
pub mod grammar;
pub mod keywords;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use lexer::{Lexer, Token, Trivia, tokenize};
pub use parser::{Parse, parse_report};
pub use syntax_kind::{ReportLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
