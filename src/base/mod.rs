//! Foundation types for the turnscan pipeline.
//!
//! This module provides the position types shared by every stage:
//! - [`Span`] - byte range plus the 1-based line/column of its start
//! - [`LineIndex`], [`LineCol`] - offset to line/column conversion
//! - [`TextRange`], [`TextSize`] - raw byte offsets (re-exported from `text-size`)
//!
//! This module has NO dependencies on other turnscan modules.

mod span;

pub use span::{LineCol, LineIndex, Span};
pub use text_size::{TextRange, TextSize};
