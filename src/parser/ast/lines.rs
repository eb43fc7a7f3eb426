use super::*;

// ============================================================================
// Root and sections
// ============================================================================

ast_node!(TurnReport, TURN_REPORT);

impl TurnReport {
    children_method!(sections, UnitSection);

    /// Lines before the first unit section
    pub fn preamble(&self) -> impl Iterator<Item = Line> + '_ {
        self.0.children().filter_map(Line::cast)
    }

    /// Every turn header line, wherever it appears
    pub fn turn_infos(&self) -> impl Iterator<Item = TurnInfo> + '_ {
        self.0.descendants().filter_map(TurnInfo::cast)
    }
}

ast_node!(UnitSection, UNIT_SECTION);

impl UnitSection {
    first_child_method!(location, UnitLocation);

    /// Lines of the section after the location line, in source order
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.0
            .children()
            .filter_map(Line::cast)
            .filter(|line| !matches!(line, Line::UnitLocation(_)))
    }
}

/// Any line of a report
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    UnitLocation(UnitLocation),
    TurnInfo(TurnInfo),
    Movement(MovementLine),
    Follows(FollowsLine),
    GoesTo(GoesToLine),
    Scout(ScoutLine),
    Status(StatusLine),
    Scry(ScryLine),
    Text(TextLine),
    Blank(BlankLine),
}

impl AstNode for Line {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::UNIT_LOCATION
                | SyntaxKind::TURN_INFO
                | SyntaxKind::MOVEMENT_LINE
                | SyntaxKind::FOLLOWS_LINE
                | SyntaxKind::GOES_TO_LINE
                | SyntaxKind::SCOUT_LINE
                | SyntaxKind::STATUS_LINE
                | SyntaxKind::SCRY_LINE
                | SyntaxKind::TEXT_LINE
                | SyntaxKind::BLANK_LINE
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::UNIT_LOCATION => Some(Self::UnitLocation(UnitLocation(node))),
            SyntaxKind::TURN_INFO => Some(Self::TurnInfo(TurnInfo(node))),
            SyntaxKind::MOVEMENT_LINE => Some(Self::Movement(MovementLine(node))),
            SyntaxKind::FOLLOWS_LINE => Some(Self::Follows(FollowsLine(node))),
            SyntaxKind::GOES_TO_LINE => Some(Self::GoesTo(GoesToLine(node))),
            SyntaxKind::SCOUT_LINE => Some(Self::Scout(ScoutLine(node))),
            SyntaxKind::STATUS_LINE => Some(Self::Status(StatusLine(node))),
            SyntaxKind::SCRY_LINE => Some(Self::Scry(ScryLine(node))),
            SyntaxKind::TEXT_LINE => Some(Self::Text(TextLine(node))),
            SyntaxKind::BLANK_LINE => Some(Self::Blank(BlankLine(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::UnitLocation(n) => n.syntax(),
            Self::TurnInfo(n) => n.syntax(),
            Self::Movement(n) => n.syntax(),
            Self::Follows(n) => n.syntax(),
            Self::GoesTo(n) => n.syntax(),
            Self::Scout(n) => n.syntax(),
            Self::Status(n) => n.syntax(),
            Self::Scry(n) => n.syntax(),
            Self::Text(n) => n.syntax(),
            Self::Blank(n) => n.syntax(),
        }
    }
}

impl Line {
    /// Whether the line went through error recovery
    pub fn is_damaged(&self) -> bool {
        has_degenerate_descendant(self.syntax())
    }
}

// ============================================================================
// Unit location
// ============================================================================

ast_node!(UnitLocation, UNIT_LOCATION);

impl UnitLocation {
    token_method!(
        unit_type,
        [TRIBE_KW, COURIER_KW, ELEMENT_KW, FLEET_KW, GARRISON_KW],
        "The unit type keyword (`Tribe`, `Courier`, ...)."
    );
    first_child_method!(unit_id, UnitIdExpr);
    first_child_method!(note, Note);
    children_method!(locations, LongLocation);

    /// The `Current Hex = ...` location
    pub fn current(&self) -> Option<LongLocation> {
        self.locations().find(LongLocation::is_current)
    }

    /// The parenthesized `Previous Hex = ...` location
    pub fn previous(&self) -> Option<LongLocation> {
        self.locations().find(LongLocation::is_previous)
    }
}

ast_node!(UnitIdExpr, UNIT_ID_EXPR);

impl UnitIdExpr {
    token_method!(token, [NUMBER, UNIT_ID], "The number or suffixed unit id token.");
}

ast_node!(Note, NOTE);

impl Note {
    /// Note text without surrounding whitespace
    pub fn text(&self) -> String {
        self.0.text().to_string().trim().to_string()
    }
}

ast_node!(LongLocation, LONG_LOCATION);

impl LongLocation {
    has_token_method!(is_current, CURRENT_KW, "Current Hex = QQ 0203");
    has_token_method!(is_previous, PREVIOUS_KW, "Previous Hex = QQ 0101");
    first_child_method!(hex, HexRef);
}

ast_node!(HexRef, HEX_REF);

impl HexRef {
    has_token_method!(is_obscured, HASH_HASH, "## 0203");
    has_token_method!(has_slash, SLASH, "N/A");

    /// `N/A`
    pub fn is_not_applicable(&self) -> bool {
        self.has_slash()
    }

    /// The two-letter grid label of a plain reference
    pub fn grid(&self) -> Option<SyntaxToken> {
        if self.is_obscured() || self.is_not_applicable() {
            return None;
        }
        significant_tokens(&self.0).find(|t| t.kind() != SyntaxKind::NUMBER)
    }

    token_method!(row_col, [NUMBER], "The four-digit row/column number.");
}

// ============================================================================
// Turn header
// ============================================================================

ast_node!(TurnInfo, TURN_INFO);

impl TurnInfo {
    first_child_method!(year_month, YearMonth);
    first_child_method!(turn_number, TurnNumber);
    first_child_method!(next_turn, NextTurn);
    token_method!(season, [SEASON], "Season word such as `Winter`.");
    token_method!(weather, [WEATHER], "Weather word such as `FINE`.");
}

ast_node!(YearMonth, YEAR_MONTH);

impl YearMonth {
    /// Whether the year or month went through error recovery
    pub fn is_damaged(&self) -> bool {
        has_degenerate_descendant(&self.0)
    }

    pub fn year(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).find(|t| t.kind() == SyntaxKind::NUMBER)
    }

    pub fn month(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0)
            .skip_while(|t| t.kind() != SyntaxKind::DASH)
            .find(|t| t.kind() == SyntaxKind::NUMBER)
    }
}

ast_node!(TurnNumber, TURN_NUMBER);

impl TurnNumber {
    token_method!(number, [NUMBER], "The number after `#`.");
}

ast_node!(NextTurn, NEXT_TURN);

impl NextTurn {
    first_child_method!(year_month, YearMonth);
    first_child_method!(turn_number, TurnNumber);
    first_child_method!(report_date, ReportDate);
}

ast_node!(ReportDate, REPORT_DATE);

impl ReportDate {
    /// Day, month and year numbers in written order
    pub fn parts(&self) -> Vec<SyntaxToken> {
        significant_tokens(&self.0)
            .filter(|t| t.kind() == SyntaxKind::NUMBER)
            .collect()
    }
}

// ============================================================================
// Directive lines
// ============================================================================

ast_node!(MovementLine, MOVEMENT_LINE);

impl MovementLine {
    first_child_method!(winds, Winds);
    first_child_method!(step_list, StepList);
    token_method!(
        unit_type,
        [TRIBE_KW, COURIER_KW, ELEMENT_KW, FLEET_KW, GARRISON_KW],
        "The unit type keyword."
    );
}

ast_node!(Winds, WINDS);

impl Winds {
    token_method!(strength, [WIND], "Wind strength such as `CALM`.");
    token_method!(direction, [DIRECTION], "Direction the wind blows from.");
}

ast_node!(FollowsLine, FOLLOWS_LINE);

impl FollowsLine {
    first_child_method!(target, UnitIdExpr);
}

ast_node!(GoesToLine, GOES_TO_LINE);

impl GoesToLine {
    first_child_method!(hex, HexRef);
    first_child_method!(name, GoesToName);
}

ast_node!(GoesToName, GOES_TO_NAME);

impl GoesToName {
    pub fn text(&self) -> String {
        self.0.text().to_string().trim().to_string()
    }
}

ast_node!(ScoutLine, SCOUT_LINE);

impl ScoutLine {
    token_method!(index, [NUMBER], "The scout number.");
    first_child_method!(step_list, StepList);
}

ast_node!(StatusLine, STATUS_LINE);

impl StatusLine {
    first_child_method!(unit_id, UnitIdExpr);
    first_child_method!(step_list, StepList);
}

ast_node!(ScryLine, SCRY_LINE);

impl ScryLine {
    /// The word after `Scry` naming what was scried
    pub fn kind(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).nth(1).filter(|t| t.kind().is_word())
    }

    first_child_method!(origin, HexRef);
    first_child_method!(payload, ScryPayload);
}

ast_node!(ScryPayload, SCRY_PAYLOAD);

impl ScryPayload {
    has_token_method!(is_move, MOVE_KW, "Move N-PR");
    has_token_method!(is_scout, SCOUT_KW, "Scout 1:Scout N-PR");
    token_method!(scout_index, [NUMBER], "The scout number of a scout payload.");
    first_child_method!(step_list, StepList);

    /// Payload text without surrounding whitespace
    pub fn text(&self) -> String {
        self.0.text().to_string().trim().to_string()
    }
}

ast_node!(TextLine, TEXT_LINE);

impl TextLine {
    pub fn text(&self) -> String {
        self.0.text().to_string().trim_end().to_string()
    }
}

ast_node!(BlankLine, BLANK_LINE);
