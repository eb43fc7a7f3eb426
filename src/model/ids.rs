//! Turn and unit identifiers

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use super::UnknownValue;

/// A game turn, written `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnId {
    pub year: u32,
    pub month: u32,
}

impl TurnId {
    pub fn new(year: u32, month: u32) -> Self {
        Self { year, month }
    }

    /// Year 0, month 0: what a header reads as when it could not be parsed
    pub fn is_zero(&self) -> bool {
        self.year == 0 && self.month == 0
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for TurnId {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || UnknownValue::new("turn id", s);
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let all_digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(year) || !all_digits(month) {
            return Err(err());
        }
        let year = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        if !(1..=12).contains(&month) {
            return Err(err());
        }
        Ok(Self { year, month })
    }
}

/// Kind of unit, from the suffix of its id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    Tribe,
    Courier,
    Element,
    Fleet,
    Garrison,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tribe => "Tribe",
            Self::Courier => "Courier",
            Self::Element => "Element",
            Self::Fleet => "Fleet",
            Self::Garrison => "Garrison",
        }
    }
}

impl FromStr for UnitKind {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tribe" => Ok(Self::Tribe),
            "Courier" => Ok(Self::Courier),
            "Element" => Ok(Self::Element),
            "Fleet" => Ok(Self::Fleet),
            "Garrison" => Ok(Self::Garrison),
            _ => Err(UnknownValue::new("unit type", s)),
        }
    }
}

/// A unit id: four digits, optionally followed by a kind letter and a
/// sequence digit (`0987`, `0987c1`, `1987e2`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(SmolStr);

impl UnitId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The four-digit tribe id the unit belongs to
    pub fn base(&self) -> &str {
        self.0.get(..4).unwrap_or_default()
    }

    /// The clan: last three digits of the base id. `0987` and `1987c1`
    /// are both clan `987`.
    pub fn clan(&self) -> &str {
        self.0.get(1..4).unwrap_or_default()
    }

    pub fn kind(&self) -> UnitKind {
        match self.0.as_bytes().get(4) {
            Some(b'c') => UnitKind::Courier,
            Some(b'e') => UnitKind::Element,
            Some(b'f') => UnitKind::Fleet,
            Some(b'g') => UnitKind::Garrison,
            _ => UnitKind::Tribe,
        }
    }

    pub fn same_clan(&self, other: &UnitId) -> bool {
        self.clan() == other.clan()
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UnitId {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let digits = bytes.len() >= 4 && bytes[..4].iter().all(u8::is_ascii_digit);
        let suffix_ok = match bytes.len() {
            4 => true,
            6 => matches!(bytes[4], b'c' | b'e' | b'f' | b'g') && (b'1'..=b'9').contains(&bytes[5]),
            _ => false,
        };
        if digits && suffix_ok {
            Ok(Self(SmolStr::new(s)))
        } else {
            Err(UnknownValue::new("unit id", s))
        }
    }
}
