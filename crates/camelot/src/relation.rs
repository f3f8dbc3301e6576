//! Harmonic mixing relations.
//!
//! Every relation is a fixed arithmetic move on the wheel, applied to a
//! key's `(position, mode)` pair:
//!
//! | relation      | position | mode    |
//! |---------------|----------|---------|
//! | minus-one     | p - 1    | same    |
//! | plus-one      | p + 1    | same    |
//! | energy-boost  | p + 2    | same    |
//! | scale-change  | p        | flipped |
//! | diagonal      | p + 1    | flipped |
//! | jaws          | p + 6    | same    |
//! | mood-shifter  | p - 2    | flipped |
//!
//! Positions wrap around the clock (12 + 1 = 1). Targets are computed on
//! demand, so there is no stored table that could drift from these rules.
//!
//! ```rust
//! use camelot::{Key, Relation};
//!
//! let a_minor: Key = "8A".parse().unwrap();
//! assert_eq!(a_minor.related(Relation::EnergyBoost).to_string(), "10A");
//! assert_eq!(a_minor.related(Relation::MoodShifter).to_string(), "6B");
//! ```
use std::fmt;
use std::str::FromStr;

use crate::key::{Key, KeySet};

/// Named mixing rule, in table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relation {
    MinusOne,
    PlusOne,
    EnergyBoost,
    ScaleChange,
    Diagonal,
    Jaws,
    MoodShifter,
}

impl Relation {
    /// All relations in the fixed left-to-right column order.
    pub const ALL: [Relation; 7] = [
        Relation::MinusOne,
        Relation::PlusOne,
        Relation::EnergyBoost,
        Relation::ScaleChange,
        Relation::Diagonal,
        Relation::Jaws,
        Relation::MoodShifter,
    ];

    /// Column header label.
    pub const fn label(self) -> &'static str {
        match self {
            Relation::MinusOne => "-1",
            Relation::PlusOne => "+1",
            Relation::EnergyBoost => "Energy Boost",
            Relation::ScaleChange => "Scale Change",
            Relation::Diagonal => "Diagonal",
            Relation::Jaws => "Jaws",
            Relation::MoodShifter => "Mood Shifter",
        }
    }

    /// Kebab-case identifier, used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Relation::MinusOne => "minus-one",
            Relation::PlusOne => "plus-one",
            Relation::EnergyBoost => "energy-boost",
            Relation::ScaleChange => "scale-change",
            Relation::Diagonal => "diagonal",
            Relation::Jaws => "jaws",
            Relation::MoodShifter => "mood-shifter",
        }
    }

    /// Position of this relation in `Relation::ALL`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The key reached from `key` under this relation.
    pub const fn apply(self, key: Key) -> Key {
        match self {
            Relation::MinusOne => key.shift(-1),
            Relation::PlusOne => key.shift(1),
            Relation::EnergyBoost => key.shift(2),
            Relation::ScaleChange => key.flip_mode(),
            Relation::Diagonal => key.shift(1).flip_mode(),
            Relation::Jaws => key.shift(6),
            Relation::MoodShifter => key.shift(-2).flip_mode(),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text does not name a relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationParseError(pub String);

impl fmt::Display for RelationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Relation::ALL.iter().map(|r| r.name()).collect();
        write!(
            f,
            "unknown relation {:?} (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for RelationParseError {}

impl FromStr for Relation {
    type Err = RelationParseError;

    /// Accepts the kebab-case name (`energy-boost`) or the header label
    /// (`Energy Boost`, `+1`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Relation::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s) || r.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| RelationParseError(s.to_string()))
    }
}

impl Key {
    /// The key reached under `relation`.
    pub const fn related(self, relation: Relation) -> Key {
        relation.apply(self)
    }
}

/// A key together with its seven relation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonicMixing {
    key: Key,
    targets: [Key; 7],
}

impl HarmonicMixing {
    pub const fn key(&self) -> Key {
        self.key
    }

    /// The identity relation ("Perfect" column): the key itself.
    pub const fn perfect(&self) -> Key {
        self.key
    }

    pub const fn get(&self, relation: Relation) -> Key {
        self.targets[relation.index()]
    }

    /// Targets in column order.
    pub fn targets(&self) -> &[Key; 7] {
        &self.targets
    }

    /// `(relation, target)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Relation, Key)> + '_ {
        Relation::ALL.into_iter().zip(self.targets.iter().copied())
    }
}

/// Compute all seven relation targets for `key`.
pub const fn harmonic_mixing(key: Key) -> HarmonicMixing {
    let mut targets = [key; 7];
    let mut i = 0;
    while i < 7 {
        targets[i] = Relation::ALL[i].apply(key);
        i += 1;
    }
    HarmonicMixing { key, targets }
}

/// `{key}` plus its seven relation targets, duplicates collapsed.
pub fn compatible_keys(key: Key) -> KeySet {
    let mut set = KeySet::new();
    set.insert(key);
    set.extend(harmonic_mixing(key).targets().iter().copied());
    set
}
