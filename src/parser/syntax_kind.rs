//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree
//! of a turn report.

/// All syntax kinds (tokens and nodes) of a turn report
///
/// Tokens are leaf nodes (words, keywords, punctuation, line ends).
/// Nodes are composite (sections, lines, steps, clauses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (spaces, tabs and lone carriage returns)
    // =========================================================================
    WHITESPACE = 0,

    // =========================================================================
    // LINE STRUCTURE
    // =========================================================================
    EOL, // \n or \r\n
    EOI, // zero-length end of input

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    COMMA,     // ,
    DASH,      // -
    EQUALS,    // =
    HASH,      // #
    HASH_HASH, // ## (obscured grid)
    L_PAREN,   // (
    R_PAREN,   // )
    QUOTE,     // "
    SLASH,     // /
    BACKSLASH, // \ (step separator)
    COLON,     // :
    PERIOD,    // .
    PLUS,      // +
    STAR,      // *
    DOLLAR,    // $

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    CURRENT_KW,
    PREVIOUS_KW,
    HEX_KW,
    TURN_KW,
    NEXT_KW,

    // Unit types
    TRIBE_KW,
    COURIER_KW,
    ELEMENT_KW,
    FLEET_KW,
    GARRISON_KW,

    // Directives
    SCOUT_KW,
    MOVE_KW,
    MOVEMENT_KW,
    FOLLOWS_KW,
    GOES_KW,
    TO_KW,
    STATUS_KW,
    SCRY_KW,
    STILL_KW,

    // =========================================================================
    // CLASSIFIED WORDS
    // =========================================================================
    NUMBER,       // 0987, 12
    UNIT_ID,      // 0987c1, 1234e2
    SEASON,       // Winter
    WEATHER,      // FINE
    WIND,         // CALM, GALE
    DIRECTION,    // N, NE, SE, S, SW, NW
    TERRAIN_CODE, // PR, GH, LCM
    TEXT,         // any other word
    UNKNOWN,      // unrecognized character

    // =========================================================================
    // NODES
    // =========================================================================
    TURN_REPORT,
    UNIT_SECTION,

    // Unit location line
    UNIT_LOCATION,
    UNIT_ID_EXPR,
    NOTE,
    LONG_LOCATION,
    HEX_REF,

    // Turn header line
    TURN_INFO,
    YEAR_MONTH,
    TURN_NUMBER,
    NEXT_TURN,
    REPORT_DATE,

    // Directive lines
    MOVEMENT_LINE,
    WINDS,
    FOLLOWS_LINE,
    GOES_TO_LINE,
    GOES_TO_NAME,
    SCOUT_LINE,
    STATUS_LINE,
    SCRY_LINE,
    SCRY_PAYLOAD,
    TEXT_LINE,
    BLANK_LINE,

    // Step grammar
    STEP_LIST,
    STEP,
    CLAUSE,
    GROUP,

    // Error recovery
    BAD,
    MISSING,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::CURRENT_KW as u16) && (self as u16) <= (Self::STILL_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::COMMA as u16) && (self as u16) <= (Self::DOLLAR as u16)
    }

    /// Check if this token is a word: keywords, classified words and free text
    pub fn is_word(self) -> bool {
        self.is_keyword() || ((self as u16) >= (Self::NUMBER as u16) && (self as u16) <= (Self::TEXT as u16))
    }

    /// Check if this is a line terminator (end of line or end of input)
    pub fn is_line_end(self) -> bool {
        matches!(self, Self::EOL | Self::EOI)
    }

    /// Check if this is a unit type keyword
    pub fn is_unit_type(self) -> bool {
        matches!(
            self,
            Self::TRIBE_KW | Self::COURIER_KW | Self::ELEMENT_KW | Self::FLEET_KW | Self::GARRISON_KW
        )
    }

    /// Check if this kind is a token rather than a node
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::UNKNOWN as u16)
    }

    /// Human-readable name used in diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::EOL => "end of line",
            Self::EOI => "end of input",
            Self::COMMA => "','",
            Self::DASH => "'-'",
            Self::EQUALS => "'='",
            Self::HASH => "'#'",
            Self::HASH_HASH => "'##'",
            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::QUOTE => "'\"'",
            Self::SLASH => "'/'",
            Self::BACKSLASH => "'\\'",
            Self::COLON => "':'",
            Self::PERIOD => "'.'",
            Self::PLUS => "'+'",
            Self::STAR => "'*'",
            Self::DOLLAR => "'$'",
            Self::CURRENT_KW => "'Current'",
            Self::PREVIOUS_KW => "'Previous'",
            Self::HEX_KW => "'Hex'",
            Self::TURN_KW => "'Turn'",
            Self::NEXT_KW => "'Next'",
            Self::TRIBE_KW => "'Tribe'",
            Self::COURIER_KW => "'Courier'",
            Self::ELEMENT_KW => "'Element'",
            Self::FLEET_KW => "'Fleet'",
            Self::GARRISON_KW => "'Garrison'",
            Self::SCOUT_KW => "'Scout'",
            Self::MOVE_KW => "'Move'",
            Self::MOVEMENT_KW => "'Movement'",
            Self::FOLLOWS_KW => "'Follows'",
            Self::GOES_KW => "'Goes'",
            Self::TO_KW => "'to'",
            Self::STATUS_KW => "'Status'",
            Self::SCRY_KW => "'Scry'",
            Self::STILL_KW => "'Still'",
            Self::NUMBER => "number",
            Self::UNIT_ID => "unit id",
            Self::SEASON => "season",
            Self::WEATHER => "weather",
            Self::WIND => "wind strength",
            Self::DIRECTION => "direction",
            Self::TERRAIN_CODE => "terrain code",
            Self::TEXT => "text",
            Self::UNKNOWN => "unknown character",
            Self::TURN_REPORT => "turn report",
            Self::UNIT_SECTION => "unit section",
            Self::UNIT_LOCATION => "unit location",
            Self::UNIT_ID_EXPR => "unit id",
            Self::NOTE => "note",
            Self::LONG_LOCATION => "location",
            Self::HEX_REF => "hex",
            Self::TURN_INFO => "turn header",
            Self::YEAR_MONTH => "year-month",
            Self::TURN_NUMBER => "turn number",
            Self::NEXT_TURN => "next turn",
            Self::REPORT_DATE => "report date",
            Self::MOVEMENT_LINE => "movement line",
            Self::WINDS => "winds",
            Self::FOLLOWS_LINE => "follows line",
            Self::GOES_TO_LINE => "goes to line",
            Self::GOES_TO_NAME => "hex name",
            Self::SCOUT_LINE => "scout line",
            Self::STATUS_LINE => "status line",
            Self::SCRY_LINE => "scry line",
            Self::SCRY_PAYLOAD => "scry payload",
            Self::TEXT_LINE => "text line",
            Self::BLANK_LINE => "blank line",
            Self::STEP_LIST => "step list",
            Self::STEP => "step",
            Self::CLAUSE => "clause",
            Self::GROUP => "group",
            Self::BAD => "malformed input",
            Self::MISSING => "missing input",
            Self::__LAST => "<invalid>",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportLanguage {}

impl rowan::Language for ReportLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<ReportLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ReportLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ReportLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<ReportLanguage>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip_through_rowan() {
        for kind in [SyntaxKind::WHITESPACE, SyntaxKind::UNIT_ID, SyntaxKind::STEP, SyntaxKind::MISSING] {
            let raw: rowan::SyntaxKind = kind.into();
            assert_eq!(SyntaxKind::from(raw), kind);
        }
    }

    #[test]
    fn test_kind_categories() {
        assert!(SyntaxKind::SCRY_KW.is_keyword());
        assert!(SyntaxKind::SCRY_KW.is_word());
        assert!(SyntaxKind::TEXT.is_word());
        assert!(!SyntaxKind::UNKNOWN.is_word());
        assert!(SyntaxKind::BACKSLASH.is_punct());
        assert!(SyntaxKind::FLEET_KW.is_unit_type());
        assert!(SyntaxKind::EOI.is_line_end());
        assert!(SyntaxKind::UNKNOWN.is_token());
        assert!(!SyntaxKind::TURN_REPORT.is_token());
    }
}
