//! Camelot key identifiers.
//!
//! A key is a clock `Position` (1-12) paired with a `Mode` (A = minor,
//! B = major). Both halves are closed enums, so every value of `Key` is one
//! of the 24 wheel keys; there is no way to build anything else.
//!
//! Parsing from text (`"8A"`, `"10b"`, `"C Major"`) is the only fallible
//! entry point and reports failures through `KeyParseError`.
use std::fmt;
use std::str::FromStr;

use crate::notation;

/// Musical mode of a key. Minor keys carry the letter `A`, major keys `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    Minor,
    Major,
}

impl Mode {
    /// Letter used in the canonical textual form.
    pub const fn letter(self) -> char {
        match self {
            Mode::Minor => 'A',
            Mode::Major => 'B',
        }
    }

    /// The opposite mode (relative major/minor).
    pub const fn flip(self) -> Mode {
        match self {
            Mode::Minor => Mode::Major,
            Mode::Major => Mode::Minor,
        }
    }

    fn from_letter(c: char) -> Option<Mode> {
        match c.to_ascii_uppercase() {
            'A' => Some(Mode::Minor),
            'B' => Some(Mode::Major),
            _ => None,
        }
    }
}

/// Clock position on the wheel, 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Position {
    One = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
}

impl Position {
    /// All positions in ascending order.
    pub const ALL: [Position; 12] = [
        Position::One,
        Position::Two,
        Position::Three,
        Position::Four,
        Position::Five,
        Position::Six,
        Position::Seven,
        Position::Eight,
        Position::Nine,
        Position::Ten,
        Position::Eleven,
        Position::Twelve,
    ];

    /// The clock number (1-12).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Map a clock number back to a position. `None` outside 1..=12.
    pub const fn from_number(n: u8) -> Option<Position> {
        if n >= 1 && n <= 12 {
            Some(Self::ALL[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Move `steps` positions around the clock, wrapping 12 -> 1 and 1 -> 12.
    pub const fn shift(self, steps: i8) -> Position {
        // Reduce first: `self - 1 + steps` can leave the i8 range.
        let idx = (self as i8 - 1 + steps % 12).rem_euclid(12);
        Self::ALL[idx as usize]
    }
}

/// One of the 24 Camelot keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    position: Position,
    mode: Mode,
}

const fn ring(mode: Mode) -> [Key; 12] {
    let mut out = [Key::new(Position::One, mode); 12];
    let mut i = 0;
    while i < 12 {
        out[i] = Key::new(Position::ALL[i], mode);
        i += 1;
    }
    out
}

impl Key {
    /// Minor keys `1A..12A` in ascending position.
    pub const MINOR: [Key; 12] = ring(Mode::Minor);

    /// Major keys `1B..12B` in ascending position.
    pub const MAJOR: [Key; 12] = ring(Mode::Major);

    /// All 24 keys in domain order: the minor block, then the major block.
    pub const ALL: [Key; 24] = {
        let mut out = [Key::new(Position::One, Mode::Minor); 24];
        let mut i = 0;
        while i < 12 {
            out[i] = Key::MINOR[i];
            out[i + 12] = Key::MAJOR[i];
            i += 1;
        }
        out
    };

    pub const fn new(position: Position, mode: Mode) -> Self {
        Self { position, mode }
    }

    pub const fn position(self) -> Position {
        self.position
    }

    pub const fn mode(self) -> Mode {
        self.mode
    }

    pub const fn is_major(self) -> bool {
        matches!(self.mode, Mode::Major)
    }

    pub const fn is_minor(self) -> bool {
        matches!(self.mode, Mode::Minor)
    }

    /// Index of this key in `Key::ALL`.
    pub const fn index(self) -> usize {
        let base = match self.mode {
            Mode::Minor => 0,
            Mode::Major => 12,
        };
        base + (self.position.number() as usize - 1)
    }

    /// Same mode, `steps` positions around the clock.
    pub const fn shift(self, steps: i8) -> Key {
        Key::new(self.position.shift(steps), self.mode)
    }

    /// Same position, opposite mode.
    pub const fn flip_mode(self) -> Key {
        Key::new(self.position, self.mode.flip())
    }

    /// Iterate over all keys in domain order.
    pub fn all() -> impl Iterator<Item = Key> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.position.number(), self.mode.letter())
    }
}

/// Error returned when text does not name one of the 24 keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    /// The input was empty (after trimming whitespace).
    Empty,

    /// The numeric part was missing or outside 1..=12.
    ///
    /// The contained `String` is the offending numeric text.
    InvalidPosition(String),

    /// The trailing mode letter was not `A` or `B`.
    InvalidMode(char),

    /// Neither a `<number><letter>` identifier nor a known long name.
    Unknown(String),
}

impl fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyParseError::Empty => write!(f, "empty key"),
            KeyParseError::InvalidPosition(s) => {
                write!(f, "invalid key position {:?} (expected 1-12)", s)
            }
            KeyParseError::InvalidMode(c) => {
                write!(f, "invalid key mode {:?} (expected A or B)", c)
            }
            KeyParseError::Unknown(s) => write!(f, "unknown key: {:?}", s),
        }
    }
}

impl std::error::Error for KeyParseError {}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        // Long musical names ("A Minor", "f-sharp major").
        if let Some(key) = Key::all().find(|k| notation::long_name(*k).eq_ignore_ascii_case(s)) {
            return Ok(key);
        }

        let Some(last) = s.chars().last() else {
            return Err(KeyParseError::Empty);
        };
        let digits = &s[..s.len() - last.len_utf8()];
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(KeyParseError::Unknown(s.to_string()));
        }
        let mode = Mode::from_letter(last).ok_or(KeyParseError::InvalidMode(last))?;
        let position = digits
            .parse::<u8>()
            .ok()
            .and_then(Position::from_number)
            .ok_or_else(|| KeyParseError::InvalidPosition(digits.to_string()))?;
        Ok(Key::new(position, mode))
    }
}

/// A set of keys stored as a 24-bit mask indexed by `Key::index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeySet(u32);

impl KeySet {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Insert `key`. Returns `true` if it was not already present.
    pub fn insert(&mut self, key: Key) -> bool {
        let bit = 1u32 << key.index();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    pub const fn contains(&self, key: Key) -> bool {
        self.0 & (1u32 << key.index()) != 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate members in domain order.
    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        Key::all().filter(move |k| self.contains(*k))
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut set = KeySet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

impl Extend<Key> for KeySet {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_domain_order() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i, "index of {}", key);
        }
    }

    #[test]
    fn shift_wraps_both_directions() {
        assert_eq!(Position::Twelve.shift(1), Position::One);
        assert_eq!(Position::One.shift(-1), Position::Twelve);
        assert_eq!(Position::Three.shift(-5), Position::Ten);
        assert_eq!(Position::Six.shift(6), Position::Twelve);
    }

    #[test]
    fn shift_handles_full_step_range() {
        for p in Position::ALL {
            for steps in [i8::MAX, i8::MIN, 120, -120, 115, -116] {
                assert_eq!(p.shift(steps), p.shift(steps % 12), "{:?} by {}", p, steps);
            }
        }
        assert_eq!(Position::Twelve.shift(120), Position::Twelve);
        assert_eq!(Position::One.shift(i8::MAX), Position::Eight);
        let key = Key::new(Position::Three, Mode::Major);
        assert_eq!(key.shift(i8::MIN), Key::new(Position::Seven, Mode::Major));
    }
}
