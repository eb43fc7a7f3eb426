//! Parse context tracking for context-aware error messages
//!
//! The parser maintains a stack of contexts so that an "expected X" message
//! can say which line shape was being parsed.

use crate::parser::SyntaxKind;

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseContext {
    /// Between lines
    TopLevel,
    /// Parsing a unit location line
    UnitLocation,
    /// Parsing `Current Hex = ...` / `Previous Hex = ...`
    Location,
    /// Parsing the `Current Turn` header
    TurnInfo,
    /// Parsing a movement line
    Movement,
    /// Parsing a follows line
    Follows,
    /// Parsing a goes-to line
    GoesTo,
    /// Parsing a scout line
    Scout,
    /// Parsing a status line
    Status,
    /// Parsing a scry line
    Scry,
    /// Parsing a step list
    Steps,
    /// Parsing a parenthesized group
    Group,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at start of line",
            Self::UnitLocation => "in unit location line",
            Self::Location => "in hex location",
            Self::TurnInfo => "in turn header",
            Self::Movement => "in movement line",
            Self::Follows => "in follows line",
            Self::GoesTo => "in goes to line",
            Self::Scout => "in scout line",
            Self::Status => "in status line",
            Self::Scry => "in scry line",
            Self::Steps => "in movement step",
            Self::Group => "in parenthesized group",
        }
    }

    /// Get the recovery tokens appropriate for this context
    pub fn recovery_tokens(&self) -> &'static [SyntaxKind] {
        match self {
            Self::Steps => &[SyntaxKind::COMMA, SyntaxKind::BACKSLASH, SyntaxKind::EOL, SyntaxKind::EOI],
            Self::Group => &[
                SyntaxKind::COMMA,
                SyntaxKind::R_PAREN,
                SyntaxKind::BACKSLASH,
                SyntaxKind::EOL,
                SyntaxKind::EOI,
            ],
            _ => &[SyntaxKind::EOL, SyntaxKind::EOI],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_recovers_at_line_end() {
        let contexts = [
            ParseContext::TopLevel,
            ParseContext::UnitLocation,
            ParseContext::Location,
            ParseContext::TurnInfo,
            ParseContext::Movement,
            ParseContext::Follows,
            ParseContext::GoesTo,
            ParseContext::Scout,
            ParseContext::Status,
            ParseContext::Scry,
            ParseContext::Steps,
            ParseContext::Group,
        ];
        for ctx in contexts {
            assert!(ctx.recovery_tokens().contains(&SyntaxKind::EOL), "{ctx:?}");
            assert!(ctx.recovery_tokens().contains(&SyntaxKind::EOI), "{ctx:?}");
            assert!(ctx.description().starts_with("in ") || ctx.description().starts_with("at "));
        }
    }
}
