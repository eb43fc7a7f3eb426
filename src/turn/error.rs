//! Fatal errors: the report produced no usable turn.

use thiserror::Error;

use crate::model::TurnId;

/// Errors that stop a report from being assembled into a turn.
///
/// All of them usually mean the line endings were not what the tokenizer
/// expects, so every message ends with that hint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No `Current Turn` line anywhere in the report.
    #[error("no turn header found; check that the report uses LF or CRLF line endings, not CR-only")]
    MissingTurnHeader,

    /// The header's year or month could not be read, or the month is not 1 to 12.
    #[error(
        "turn header on line {line} is malformed; check that the report uses LF or CRLF line endings, not CR-only"
    )]
    MalformedTurnHeader { line: u32 },

    /// The header was found but its year and month read as zero.
    #[error(
        "turn header on line {line} reads as year 0, month 0; check that the report uses LF or CRLF line endings, not CR-only"
    )]
    ZeroTurn { line: u32 },

    /// The header names a different turn than the caller expected.
    #[error(
        "expected turn {expected} but the report header says {found}; check that the report uses LF or CRLF line endings, not CR-only"
    )]
    TurnMismatch { expected: TurnId, found: TurnId },
}
