//! Error code definitions for report diagnostics
//!
//! Error codes follow a naming convention: {E|W}{category}{number}
//! - E01xx: Lexical errors (invalid characters)
//! - E02xx: Structural line errors (missing or unexpected tokens)
//! - E03xx: Location and turn header grammar
//! - E04xx: Step and observation grammar
//! - E05xx: Section and turn consistency
//! - W04xx: Observation warnings

use std::fmt;

/// Error codes for report diagnostics
///
/// Each error code represents a specific category of problem,
/// enabling filtering and stable references in tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Character the lexer could not classify
    E0101,

    // =========================================================================
    // E02xx: Structural line errors
    // =========================================================================
    /// Expected token is missing
    E0202,
    /// Unclosed parenthesis
    E0203,
    /// Unexpected tokens before end of line
    E0204,

    // =========================================================================
    // E03xx: Location and turn header grammar
    // =========================================================================
    /// Malformed hex reference
    E0302,
    /// Malformed turn header
    E0303,
    /// Malformed unit id
    E0304,

    // =========================================================================
    // E04xx: Step and observation grammar
    // =========================================================================
    /// Clause cannot start with this token
    E0401,
    /// Missing terrain after a direction
    E0402,
    /// Malformed far horizon sighting
    E0403,

    // =========================================================================
    // E05xx: Section and turn consistency
    // =========================================================================
    /// Turn header disagrees with the first header in the report
    E0501,
    /// Same unit reported in more than one section
    E0502,
    /// Goto target names an unknown special hex
    E0503,
    /// Directive ignored because an earlier directive decided the unit's movement
    E0504,

    // =========================================================================
    // W04xx: Observation warnings
    // =========================================================================
    /// Observation clause not recognized
    W0401,
    /// Failure phrase not recognized
    W0402,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0202")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0503 => "E0503",
            Self::E0504 => "E0504",
            Self::W0401 => "W0401",
            Self::W0402 => "W0402",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 => "lexical error",
            Self::E0202 | Self::E0203 | Self::E0204 => "structural error",
            Self::E0302 | Self::E0303 | Self::E0304 => "header error",
            Self::E0401 | Self::E0402 | Self::E0403 => "step error",
            Self::E0501 | Self::E0502 | Self::E0503 | Self::E0504 => "section error",
            Self::W0401 | Self::W0402 => "observation warning",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0202 => "expected token",
            Self::E0203 => "unclosed parenthesis",
            Self::E0204 => "unexpected input before end of line",
            Self::E0302 => "malformed hex",
            Self::E0303 => "malformed turn header",
            Self::E0304 => "malformed unit id",
            Self::E0401 => "malformed clause",
            Self::E0402 => "missing terrain after direction",
            Self::E0403 => "malformed far horizon sighting",
            Self::E0501 => "conflicting turn header",
            Self::E0502 => "duplicate unit section",
            Self::E0503 => "unknown special hex",
            Self::E0504 => "directive ignored",
            Self::W0401 => "unrecognized observation",
            Self::W0402 => "unrecognized failure",
        }
    }

    /// Warning codes start with `W`
    pub fn is_warning_code(&self) -> bool {
        self.as_str().starts_with('W')
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E0202.to_string(), "E0202");
        assert_eq!(ErrorCode::W0401.to_string(), "W0401");
    }

    #[test]
    fn test_warning_codes() {
        assert!(ErrorCode::W0401.is_warning_code());
        assert!(!ErrorCode::E0401.is_warning_code());
    }
}
