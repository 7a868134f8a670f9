//! # Pitch Model
//!
//! Parses pitch names like `C#4`, `Bb2` or `E4` into [`Pitch`] values that carry
//! an integer semitone `height` for arithmetic comparison.
//!
//! ## Height
//! - `height = letter offset + accidentals + octave * 12`
//! - Letter offsets: `C=0 D=2 E=4 F=5 G=7 A=9 B=11`
//! - Each `#` adds one semitone, each `b` subtracts one
//! - Example: `C4 = 48`, `B3 = 47`, `E2 = 28`, `Cb4 = 47`
//!
//! Heights are what the fretboard mapper subtracts, so two spellings of the same
//! sound (`B3`, `Cb4`) land on the same fret.
//!
//! ## Name Syntax
//! ```text
//! pitch       = letter accidental* octave
//! pitch-class = letter accidental*
//! letter      = A-G (either case)
//! accidental  = '#' | 'b'
//! octave      = '-'? digit+
//! ```
//! Sharps and flats cannot be mixed in a single name. Octaves are limited to
//! [`MIN_OCTAVE`]`..=`[`MAX_OCTAVE`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::FretError;

/// Lowest octave a pitch may be written in
pub const MIN_OCTAVE: i32 = -1;
/// Highest octave a pitch may be written in
pub const MAX_OCTAVE: i32 = 10;

/// Note letters C through B, in ascending order within an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Parse a letter, case-insensitive
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Semitone offset of the natural letter from C
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// The letter `steps` scale degrees above this one (wrapping B -> C)
    pub fn step(self, steps: usize) -> Letter {
        Letter::ALL[(self as usize + steps) % 7]
    }
}

/// A note name ignoring octave, e.g. `C#` or `Bb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass {
    pub letter: Letter,
    /// Accidental count: positive = sharps, negative = flats
    pub alter: i8,
}

impl PitchClass {
    pub fn new(letter: Letter, alter: i8) -> Self {
        Self { letter, alter }
    }

    /// Parse a pitch class name with no octave (`"F#"`, `"Bb"`, `"E"`)
    pub fn parse(name: &str) -> Result<Self, FretError> {
        let (pitch_class, rest) = split_pitch_class(name)?;
        if !rest.is_empty() {
            return Err(FretError::InvalidPitch(name.to_string()));
        }
        Ok(pitch_class)
    }

    /// Position within the octave, 0-11
    pub fn chroma(&self) -> i32 {
        (self.letter.semitone() + i32::from(self.alter)).rem_euclid(12)
    }

    pub fn at_octave(self, octave: i32) -> Result<Pitch, FretError> {
        Pitch::new(self, octave)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accidental = if self.alter < 0 { 'b' } else { '#' };
        write!(f, "{}", self.letter.as_char())?;
        for _ in 0..self.alter.unsigned_abs() {
            write!(f, "{}", accidental)?;
        }
        Ok(())
    }
}

impl FromStr for PitchClass {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A concrete pitch: pitch class, octave and semitone height
///
/// Pitches are immutable; the height is fixed at construction so that it always
/// agrees with the pitch class and octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pitch {
    pitch_class: PitchClass,
    octave: i32,
    height: i32,
}

impl Pitch {
    /// Fails with [`FretError::InvalidPitch`] outside `MIN_OCTAVE..=MAX_OCTAVE`
    pub fn new(pitch_class: PitchClass, octave: i32) -> Result<Self, FretError> {
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return Err(FretError::InvalidPitch(format!("{}{}", pitch_class, octave)));
        }
        Ok(Self::from_parts(pitch_class, octave))
    }

    /// Caller guarantees the octave is in range
    pub(crate) fn from_parts(pitch_class: PitchClass, octave: i32) -> Self {
        let height =
            pitch_class.letter.semitone() + i32::from(pitch_class.alter) + octave * 12;
        Self {
            pitch_class,
            octave,
            height,
        }
    }

    /// Parse a full pitch name such as `"E4"`, `"C#3"` or `"Bb-1"`
    ///
    /// # Example
    /// ```
    /// use fretmap::Pitch;
    ///
    /// let c4 = Pitch::parse("C4").unwrap();
    /// assert_eq!(c4.height(), 48);
    /// assert_eq!(Pitch::parse("Db4").unwrap().height(), 49);
    /// assert!(Pitch::parse("H4").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self, FretError> {
        let invalid = || FretError::InvalidPitch(name.to_string());
        let (pitch_class, rest) = split_pitch_class(name)?;

        let digits = rest.strip_prefix('-').unwrap_or(rest);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let octave: i32 = rest.parse().map_err(|_| invalid())?;
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return Err(invalid());
        }

        Ok(Self::from_parts(pitch_class, octave))
    }

    /// Spell `height` using the given letter, choosing whatever accidental and
    /// octave make the letter reach that height.
    pub(crate) fn spelled(letter: Letter, height: i32) -> Self {
        // Nearest alteration of the natural letter, in -6..=5
        let alter = (height - letter.semitone() + 6).rem_euclid(12) - 6;
        let octave = (height - letter.semitone() - alter).div_euclid(12);
        Self {
            pitch_class: PitchClass::new(letter, alter as i8),
            octave,
            height,
        }
    }

    /// Spell `height` with naturals where possible, otherwise a single sharp or flat
    pub(crate) fn from_height(height: i32, prefer_flat: bool) -> Self {
        // 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
        let (letter, alter) = match height.rem_euclid(12) {
            0 => (Letter::C, 0),
            1 => if prefer_flat { (Letter::D, -1) } else { (Letter::C, 1) },
            2 => (Letter::D, 0),
            3 => if prefer_flat { (Letter::E, -1) } else { (Letter::D, 1) },
            4 => (Letter::E, 0),
            5 => (Letter::F, 0),
            6 => if prefer_flat { (Letter::G, -1) } else { (Letter::F, 1) },
            7 => (Letter::G, 0),
            8 => if prefer_flat { (Letter::A, -1) } else { (Letter::G, 1) },
            9 => (Letter::A, 0),
            10 => if prefer_flat { (Letter::B, -1) } else { (Letter::A, 1) },
            _ => (Letter::B, 0),
        };
        Self {
            pitch_class: PitchClass::new(letter, alter),
            octave: height.div_euclid(12),
            height,
        }
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.pitch_class
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Semitones above C0
    pub fn height(&self) -> i32 {
        self.height
    }

    /// MIDI note number (C4 = 60)
    pub fn midi(&self) -> i32 {
        self.height + 12
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.height
            .cmp(&other.height)
            .then_with(|| self.pitch_class.cmp(&other.pitch_class))
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl FromStr for Pitch {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Split the leading letter and accidentals off `name`, returning the rest
fn split_pitch_class(name: &str) -> Result<(PitchClass, &str), FretError> {
    let invalid = || FretError::InvalidPitch(name.to_string());

    let first = name.chars().next().ok_or_else(invalid)?;
    let letter = Letter::from_char(first).ok_or_else(invalid)?;

    let after_letter = &name[first.len_utf8()..];
    let rest = after_letter.trim_start_matches(|c: char| c == '#' || c == 'b');
    let accidentals = &after_letter[..after_letter.len() - rest.len()];

    let sharps = accidentals.matches('#').count();
    let flats = accidentals.matches('b').count();
    if sharps > 0 && flats > 0 {
        return Err(invalid());
    }
    let count = i8::try_from(sharps.max(flats)).map_err(|_| invalid())?;
    let alter = if flats > 0 { -count } else { count };

    Ok((PitchClass::new(letter, alter), rest))
}
