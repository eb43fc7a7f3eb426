//! Domain model of a parsed turn
//!
//! ```text
//! Turn ── units ──▶ Moves ── steps ──▶ Move ── report ──▶ Report
//!                     ├── scouts ──▶ Scout ── steps ──▶ Move
//!                     └── scries ──▶ Scry ── moves / scout
//! ```
//!
//! Values are built while one unit section is read and are not changed
//! after the section ends.

mod enums;
mod ids;
mod moves;

pub use enums::{CompassPoint, Direction, Edge, Resource, Terrain, WindStrength};
pub use ids::{TurnId, UnitId, UnitKind};
pub use moves::{
    Border, BorderKind, Encounter, FarHorizon, FarTerrain, FoundItem, HexTarget, MergeConflict, Move,
    MoveKind, MoveResult, Moves, Report, Scout, Scry, Settlement, SpecialHex, Turn, Winds,
};

/// A word that is not part of a closed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what} '{text}'")]
pub struct UnknownValue {
    pub what: &'static str,
    pub text: String,
}

impl UnknownValue {
    pub fn new(what: &'static str, text: &str) -> Self {
        Self {
            what,
            text: text.to_string(),
        }
    }
}
