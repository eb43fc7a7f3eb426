//! Diagnostics for the report parser
//!
//! This module provides:
//! - Categorized error codes for filtering and documentation
//! - Context-aware "expected X" messages
//! - An ordered collector shared by every parsing stage
//! - A plain-text formatter (`file:line:col: severity: message` plus a caret)

mod codes;
mod context;
mod error;
mod render;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{Diagnostic, DiagnosticBuilder, DiagnosticCollector, Severity, expected_in_context};
pub use render::{render, render_all};
