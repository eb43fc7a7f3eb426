//! Turns, per-unit moves and the observations made along the way

use std::collections::BTreeMap;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::enums::{CompassPoint, Direction, Edge, Resource, Terrain, WindStrength};
use super::ids::{TurnId, UnitId};
use crate::base::Span;
use crate::syntax::HexLocation;

/// Every unit's moves for one turn
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub id: TurnId,
    pub year: u32,
    pub month: u32,
    /// Units in the order their sections appear in the report
    pub units: IndexMap<UnitId, Moves>,
    /// Named goto targets, keyed by lower-cased name
    pub special_names: BTreeMap<String, SpecialHex>,
}

impl Turn {
    pub fn new(id: TurnId) -> Self {
        Self {
            id,
            year: id.year,
            month: id.month,
            ..Self::default()
        }
    }

    pub fn unit(&self, id: &str) -> Option<&Moves> {
        self.units.iter().find(|(unit, _)| unit.as_str() == id).map(|(_, moves)| moves)
    }
}

/// A named hex used as a goto target
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialHex {
    /// Name as configured, or as first written when not configured
    pub name: SmolStr,
    /// Whether the name was among the configured special names
    pub known: bool,
}

/// Where a unit was sent with `Goes to`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexTarget {
    Hex(HexLocation),
    Special(SmolStr),
}

/// Fleet winds, e.g. `CALM NE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Winds {
    pub strength: WindStrength,
    pub from: Direction,
}

/// Everything one unit did in one turn
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moves {
    pub unit: UnitId,
    pub turn: TurnId,
    pub previous_hex: HexLocation,
    pub current_hex: HexLocation,
    /// Primary steps in source order
    pub steps: Vec<Move>,
    pub follows: Option<UnitId>,
    pub goes_to: Option<HexTarget>,
    /// The follows or goes-to line as a move, when one decided the
    /// unit's movement
    pub directive: Option<Move>,
    pub winds: Option<Winds>,
    pub scouts: Vec<Scout>,
    pub scries: Vec<Scry>,
}

impl Moves {
    pub fn new(unit: UnitId, turn: TurnId, previous_hex: HexLocation, current_hex: HexLocation) -> Self {
        Self {
            unit,
            turn,
            previous_hex,
            current_hex,
            steps: Vec::new(),
            follows: None,
            goes_to: None,
            directive: None,
            winds: None,
            scouts: Vec::new(),
            scries: Vec::new(),
        }
    }

    /// Append another section's moves for the same unit.
    ///
    /// Following, going to a hex and stepping stay mutually exclusive: the
    /// first section to decide wins, and whatever `other` adds against that
    /// is dropped and returned.
    pub fn merge(&mut self, other: Moves) -> Option<MergeConflict> {
        self.scouts.extend(other.scouts);
        self.scries.extend(other.scries);
        self.winds = self.winds.or(other.winds);

        let other_decided = other.follows.is_some() || other.goes_to.is_some();
        if self.follows.is_some() || self.goes_to.is_some() {
            if other_decided {
                return Some(MergeConflict::Directive);
            }
            return (!other.steps.is_empty()).then_some(MergeConflict::Steps);
        }
        if other_decided {
            if !self.steps.is_empty() {
                return Some(MergeConflict::Directive);
            }
            self.follows = other.follows;
            self.goes_to = other.goes_to;
            self.directive = other.directive;
            return None;
        }
        self.steps.extend(other.steps);
        None
    }
}

/// Part of a repeated section that [`Moves::merge`] left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeConflict {
    /// Steps for a unit that already follows or goes to a hex
    Steps,
    /// A follows or goes-to line for a unit whose movement was already decided
    Directive,
}

impl MergeConflict {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Steps => "movement steps",
            Self::Directive => "follows or goes to line",
        }
    }
}

/// Outcome of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveResult {
    Succeeded,
    StayedInPlace,
    Blocked,
    ExhaustedMovementPoints,
    Prohibited,
    Failed,
    Vanished,
}

impl MoveResult {
    /// Short failure reason. `None` for steps that did not fail.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Succeeded | Self::StayedInPlace => None,
            Self::Blocked => Some("blocked"),
            Self::ExhaustedMovementPoints => Some("exhaust"),
            Self::Prohibited => Some("terrain"),
            Self::Failed | Self::Vanished => Some("unknown"),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.reason().is_some()
    }
}

/// What a step tried to do
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    Advance(Direction),
    Still,
    Follows(UnitId),
    GoesTo(HexTarget),
}

/// One step of a unit, scout or scry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// 1-based report line the step came from
    pub line_no: u32,
    /// 1-based position within its line
    pub step_no: u32,
    pub kind: MoveKind,
    pub result: MoveResult,
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    pub reason: Option<&'static str>,
    pub report: Option<Report>,
    pub span: Span,
}

impl Move {
    pub fn new(kind: MoveKind, result: MoveResult, span: Span) -> Self {
        Self {
            line_no: span.line,
            step_no: 1,
            kind,
            result,
            reason: result.reason(),
            report: None,
            span,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.kind {
            MoveKind::Advance(direction) => Some(direction),
            _ => None,
        }
    }
}

/// A scout's own steps
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scout {
    pub index: u32,
    pub steps: Vec<Move>,
}

/// A scried sub-report
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scry {
    /// What was scried, e.g. `Tribe` or `Scouts`
    pub kind: SmolStr,
    pub origin: HexLocation,
    /// Payload as written
    pub text: SmolStr,
    pub moves: Option<Vec<Move>>,
    pub scout: Option<Scout>,
}

// ============================================================================
// Observations
// ============================================================================

/// What lies across one border of a hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderKind {
    Edge(Edge),
    Terrain(Terrain),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    pub direction: Direction,
    pub kind: BorderKind,
}

/// Another unit seen in the hex
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    pub unit: UnitId,
    pub friendly: bool,
}

/// Land or water at extreme range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FarTerrain {
    Land,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FarHorizon {
    pub point: CompassPoint,
    pub terrain: FarTerrain,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    pub name: SmolStr,
}

/// Something picked up with `Find`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoundItem {
    pub quantity: Option<u32>,
    pub name: SmolStr,
}

/// Observations made at the hex a step ended in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub terrain: Option<Terrain>,
    pub borders: Vec<Border>,
    pub encounters: Vec<Encounter>,
    pub items: Vec<FoundItem>,
    pub resources: Vec<Resource>,
    pub settlements: Vec<Settlement>,
    pub far_horizons: Vec<FarHorizon>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.terrain.is_none()
            && self.borders.is_empty()
            && self.encounters.is_empty()
            && self.items.is_empty()
            && self.resources.is_empty()
            && self.settlements.is_empty()
            && self.far_horizons.is_empty()
    }

    /// Add a border unless the same one was already seen
    pub fn add_border(&mut self, border: Border) {
        if !self.borders.contains(&border) {
            self.borders.push(border);
        }
    }

    /// Finish the report: a direction with an edge keeps only its edges,
    /// since a river hides the terrain beyond it.
    pub fn freeze(mut self) -> Self {
        let edged: Vec<Direction> = self
            .borders
            .iter()
            .filter(|b| matches!(b.kind, BorderKind::Edge(_)))
            .map(|b| b.direction)
            .collect();
        self.borders
            .retain(|b| matches!(b.kind, BorderKind::Edge(_)) || !edged.contains(&b.direction));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MoveResult::Succeeded, None)]
    #[case(MoveResult::StayedInPlace, None)]
    #[case(MoveResult::Blocked, Some("blocked"))]
    #[case(MoveResult::ExhaustedMovementPoints, Some("exhaust"))]
    #[case(MoveResult::Prohibited, Some("terrain"))]
    #[case(MoveResult::Failed, Some("unknown"))]
    #[case(MoveResult::Vanished, Some("unknown"))]
    fn test_reason_mapping(#[case] result: MoveResult, #[case] reason: Option<&str>) {
        assert_eq!(result.reason(), reason);
        let step = Move::new(MoveKind::Still, result, Span::default());
        assert_eq!(step.reason, reason);
    }

    #[test]
    fn test_edge_beats_terrain() {
        let mut report = Report::default();
        report.add_border(Border {
            direction: Direction::North,
            kind: BorderKind::Terrain(Terrain::Ocean),
        });
        report.add_border(Border {
            direction: Direction::North,
            kind: BorderKind::Edge(Edge::River),
        });
        report.add_border(Border {
            direction: Direction::South,
            kind: BorderKind::Terrain(Terrain::Lake),
        });
        let report = report.freeze();
        assert_eq!(
            report.borders,
            vec![
                Border {
                    direction: Direction::North,
                    kind: BorderKind::Edge(Edge::River)
                },
                Border {
                    direction: Direction::South,
                    kind: BorderKind::Terrain(Terrain::Lake)
                },
            ]
        );
    }

    fn moves_for(unit: &str) -> Moves {
        let hex = HexLocation::NotApplicable { span: Span::default() };
        Moves::new(unit.parse().unwrap(), TurnId::new(899, 12), hex.clone(), hex)
    }

    #[test]
    fn test_merge_appends_steps() {
        let mut first = moves_for("0987");
        first.steps.push(Move::new(MoveKind::Advance(Direction::North), MoveResult::Succeeded, Span::default()));
        let mut second = moves_for("0987");
        second.steps.push(Move::new(MoveKind::Still, MoveResult::StayedInPlace, Span::default()));
        assert_eq!(first.merge(second), None);
        assert_eq!(first.steps.len(), 2);
        assert_eq!(first.steps[1].kind, MoveKind::Still);
    }

    #[test]
    fn test_merge_keeps_follows_exclusive() {
        let leader: UnitId = "0988".parse().unwrap();
        let mut follower = moves_for("0987");
        follower.follows = Some(leader.clone());
        let mut mover = moves_for("0987");
        mover.steps.push(Move::new(MoveKind::Advance(Direction::North), MoveResult::Succeeded, Span::default()));
        assert_eq!(follower.merge(mover.clone()), Some(MergeConflict::Steps));
        assert_eq!(follower.follows, Some(leader.clone()));
        assert!(follower.steps.is_empty());

        let mut later_follower = moves_for("0987");
        later_follower.follows = Some(leader);
        assert_eq!(mover.merge(later_follower), Some(MergeConflict::Directive));
        assert!(mover.follows.is_none());
        assert_eq!(mover.steps.len(), 1);
    }

    #[test]
    fn test_merge_adopts_directive_when_undecided() {
        let mut first = moves_for("0987");
        let mut second = moves_for("0987");
        second.follows = Some("0988".parse().unwrap());
        assert_eq!(first.merge(second), None);
        assert_eq!(first.follows.as_ref().map(UnitId::as_str), Some("0988"));
    }
}
