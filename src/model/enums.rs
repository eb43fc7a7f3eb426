//! Small closed vocabularies of the report: directions, terrain, edges,
//! resources and winds.

use std::fmt;
use std::str::FromStr;

use super::UnknownValue;

/// Implements `as_str`, `Display` and an exact-match `FromStr` over a
/// table of `(variant, text)` pairs.
macro_rules! text_enum {
    ($name:ident, $what:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(UnknownValue::new($what, s)),
                }
            }
        }
    };
}

// ============================================================================
// Direction
// ============================================================================

/// The six hex directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

text_enum!(Direction, "direction", {
    North => "N",
    NorthEast => "NE",
    SouthEast => "SE",
    South => "S",
    SouthWest => "SW",
    NorthWest => "NW",
});

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::NorthWest => Self::SouthEast,
        }
    }
}

/// Bearing of a far horizon sighting: one direction (`N`, also written
/// `N/N`) or the boundary between two (`N/NE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassPoint {
    Toward(Direction),
    Between(Direction, Direction),
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toward(d) => write!(f, "{d}"),
            Self::Between(a, b) => write!(f, "{a}/{b}"),
        }
    }
}

impl FromStr for CompassPoint {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || UnknownValue::new("compass point", s);
        match s.split_once('/') {
            None => Ok(Self::Toward(s.parse().map_err(|_| err())?)),
            Some((a, b)) => {
                let a: Direction = a.parse().map_err(|_| err())?;
                let b: Direction = b.parse().map_err(|_| err())?;
                Ok(if a == b { Self::Toward(a) } else { Self::Between(a, b) })
            }
        }
    }
}

// ============================================================================
// Terrain
// ============================================================================

/// Hex terrain, known by a short code (`PR`) and a long name (`PRAIRIE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Alps,
    AridHills,
    AridTundra,
    BrushFlat,
    BrushHills,
    ConiferHills,
    Deciduous,
    Desert,
    DeciduousHills,
    GrassyHills,
    GrassyHillsPlateau,
    HighSnowyMountains,
    Jungle,
    JungleHills,
    Lake,
    LowAridMountains,
    LowConiferMountains,
    LowJungleMountains,
    LowSnowyMountains,
    LowVolcanicMountains,
    Ocean,
    PolarIce,
    Prairie,
    RockyHills,
    SnowyHills,
    Swamp,
    Tundra,
}

text_enum!(Terrain, "terrain code", {
    Alps => "ALPS",
    AridHills => "AH",
    AridTundra => "AR",
    BrushFlat => "BF",
    BrushHills => "BH",
    ConiferHills => "CH",
    Deciduous => "D",
    Desert => "DE",
    DeciduousHills => "DH",
    GrassyHills => "GH",
    GrassyHillsPlateau => "GHP",
    HighSnowyMountains => "HSM",
    Jungle => "JG",
    JungleHills => "JH",
    Lake => "L",
    LowAridMountains => "LAM",
    LowConiferMountains => "LCM",
    LowJungleMountains => "LJM",
    LowSnowyMountains => "LSM",
    LowVolcanicMountains => "LVM",
    Ocean => "O",
    PolarIce => "PI",
    Prairie => "PR",
    RockyHills => "RH",
    SnowyHills => "SH",
    Swamp => "SW",
    Tundra => "TU",
});

impl Terrain {
    /// Short code as written in movement steps
    pub fn code(&self) -> &'static str {
        self.as_str()
    }

    /// Long upper-case name as written in status lines
    pub fn long_name(&self) -> &'static str {
        match self {
            Self::Alps => "ALPS",
            Self::AridHills => "ARID HILLS",
            Self::AridTundra => "ARID TUNDRA",
            Self::BrushFlat => "BRUSH FLAT",
            Self::BrushHills => "BRUSH HILLS",
            Self::ConiferHills => "CONIFER HILLS",
            Self::Deciduous => "DECIDUOUS",
            Self::Desert => "DESERT",
            Self::DeciduousHills => "DECIDUOUS HILLS",
            Self::GrassyHills => "GRASSY HILLS",
            Self::GrassyHillsPlateau => "GRASSY HILLS PLATEAU",
            Self::HighSnowyMountains => "HIGH SNOWY MOUNTAINS",
            Self::Jungle => "JUNGLE",
            Self::JungleHills => "JUNGLE HILLS",
            Self::Lake => "LAKE",
            Self::LowAridMountains => "LOW ARID MOUNTAINS",
            Self::LowConiferMountains => "LOW CONIFER MOUNTAINS",
            Self::LowJungleMountains => "LOW JUNGLE MOUNTAINS",
            Self::LowSnowyMountains => "LOW SNOWY MOUNTAINS",
            Self::LowVolcanicMountains => "LOW VOLCANIC MOUNTAINS",
            Self::Ocean => "OCEAN",
            Self::PolarIce => "POLAR ICE",
            Self::Prairie => "PRAIRIE",
            Self::RockyHills => "ROCKY HILLS",
            Self::SnowyHills => "SNOWY HILLS",
            Self::Swamp => "SWAMP",
            Self::Tundra => "TUNDRA",
        }
    }

    /// Look up a long name, ignoring case (`Ocean`, `GRASSY HILLS`)
    pub fn from_long_name(name: &str) -> Option<Terrain> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.long_name().eq_ignore_ascii_case(name))
    }

    /// Code or long name
    pub fn lookup(text: &str) -> Option<Terrain> {
        text.parse().ok().or_else(|| Self::from_long_name(text))
    }

    pub fn is_water(&self) -> bool {
        matches!(self, Self::Lake | Self::Ocean)
    }
}

// ============================================================================
// Edges
// ============================================================================

/// Features that sit on the border between two hexes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Canal,
    Ford,
    Pass,
    River,
    StoneRoad,
}

text_enum!(Edge, "edge", {
    Canal => "Canal",
    Ford => "Ford",
    Pass => "Pass",
    River => "River",
    StoneRoad => "Stone Road",
});

impl Edge {
    /// Case-insensitive lookup of an edge name
    pub fn lookup(text: &str) -> Option<Edge> {
        Self::ALL.iter().copied().find(|e| e.as_str().eq_ignore_ascii_case(text))
    }
}

// ============================================================================
// Resources
// ============================================================================

/// Natural resources a unit can find in a hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resource {
    Coal,
    CopperOre,
    Diamond,
    Frankincense,
    Gold,
    IronOre,
    Jade,
    Kaolin,
    LeadOre,
    Limestone,
    NickelOre,
    Pearls,
    Pyrite,
    Rubies,
    Salt,
    Silver,
    Sulphur,
    TinOre,
    VanadiumOre,
    ZincOre,
}

text_enum!(Resource, "resource", {
    Coal => "Coal",
    CopperOre => "Copper Ore",
    Diamond => "Diamond",
    Frankincense => "Frankincense",
    Gold => "Gold",
    IronOre => "Iron Ore",
    Jade => "Jade",
    Kaolin => "Kaolin",
    LeadOre => "Lead Ore",
    Limestone => "Limestone",
    NickelOre => "Nickel Ore",
    Pearls => "Pearls",
    Pyrite => "Pyrite",
    Rubies => "Rubies",
    Salt => "Salt",
    Silver => "Silver",
    Sulphur => "Sulphur",
    TinOre => "Tin Ore",
    VanadiumOre => "Vanadium Ore",
    ZincOre => "Zinc Ore",
});

impl Resource {
    /// Case-insensitive lookup of a resource name
    pub fn lookup(text: &str) -> Option<Resource> {
        Self::ALL.iter().copied().find(|r| r.as_str().eq_ignore_ascii_case(text))
    }
}

// ============================================================================
// Winds
// ============================================================================

/// Wind strength on a fleet movement line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindStrength {
    Calm,
    Mild,
    Strong,
    Gale,
}

text_enum!(WindStrength, "wind strength", {
    Calm => "CALM",
    Mild => "MILD",
    Strong => "STRONG",
    Gale => "GALE",
});
