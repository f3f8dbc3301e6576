//! Short and long names for each key.
use crate::key::Key;

/// Display names for a key: the Camelot identifier and the musical key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotation {
    pub short: &'static str,
    pub long: &'static str,
}

// Indexed by `Key::index`.
const SHORT: [&str; 24] = [
    "1A", "2A", "3A", "4A", "5A", "6A", "7A", "8A", "9A", "10A", "11A", "12A", //
    "1B", "2B", "3B", "4B", "5B", "6B", "7B", "8B", "9B", "10B", "11B", "12B",
];

const LONG: [&str; 24] = [
    "A-Flat Minor",
    "E-Flat Minor",
    "B-Flat Minor",
    "F Minor",
    "C Minor",
    "G Minor",
    "D Minor",
    "A Minor",
    "E Minor",
    "B Minor",
    "F-Sharp Minor",
    "D-Flat Minor",
    "B Major",
    "F-Sharp Major",
    "D-Flat Major",
    "A-Flat Major",
    "E-Flat Major",
    "B-Flat Major",
    "F Major",
    "C Major",
    "G Major",
    "D Major",
    "A Major",
    "E Major",
];

pub const fn notation(key: Key) -> KeyNotation {
    KeyNotation {
        short: SHORT[key.index()],
        long: LONG[key.index()],
    }
}

pub const fn short_name(key: Key) -> &'static str {
    SHORT[key.index()]
}

pub const fn long_name(key: Key) -> &'static str {
    LONG[key.index()]
}

impl Key {
    /// Musical name, e.g. `"A Minor"` for `8A`.
    pub const fn long_name(self) -> &'static str {
        long_name(self)
    }

    pub const fn notation(self) -> KeyNotation {
        notation(self)
    }
}
