//! # Scale Formulas and Generation
//!
//! A read-only table maps scale names to semitone patterns, and the generator
//! expands a descriptor such as `"A minor pentatonic"` into concrete pitches.
//!
//! ## Descriptor
//! `"<root pitch class> <formula name>"`, e.g. `"C major"`, `"F# dorian"`,
//! `"Bb minor pentatonic"`. The formula name is matched case-insensitively with
//! runs of whitespace collapsed.
//!
//! ## Generation
//! For each octave in the span (`0..=5` by default) the root is placed at that
//! octave and every formula offset is added to its height. Output is
//! octave-major, then formula order. Pitches are never deduplicated across
//! octaves.
//!
//! ## Spelling
//! Heights never depend on spelling, but names do:
//! - Seven-note formulas use one letter per degree (`F major` has `Bb`, `F# major` has `E#`)
//! - Other formulas use flats when the root is flat or the formula has a minor
//!   third, sharps otherwise (`C minor pentatonic` = `C Eb F G Bb`)

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FretError;
use crate::pitch::{Pitch, PitchClass, MAX_OCTAVE, MIN_OCTAVE};

/// A named, ordered set of semitone offsets from a root
///
/// Offsets lie in `0..=11`, start at 0 and strictly increase.
#[derive(Debug, PartialEq, Eq)]
pub struct ScaleFormula {
    name: &'static str,
    intervals: &'static [u8],
}

static FORMULAS: &[ScaleFormula] = &[
    ScaleFormula { name: "major", intervals: &[0, 2, 4, 5, 7, 9, 11] },
    ScaleFormula { name: "minor", intervals: &[0, 2, 3, 5, 7, 8, 10] },
    ScaleFormula { name: "dorian", intervals: &[0, 2, 3, 5, 7, 9, 10] },
    ScaleFormula { name: "phrygian", intervals: &[0, 1, 3, 5, 7, 8, 10] },
    ScaleFormula { name: "lydian", intervals: &[0, 2, 4, 6, 7, 9, 11] },
    ScaleFormula { name: "mixolydian", intervals: &[0, 2, 4, 5, 7, 9, 10] },
    ScaleFormula { name: "locrian", intervals: &[0, 1, 3, 5, 6, 8, 10] },
    ScaleFormula { name: "harmonic minor", intervals: &[0, 2, 3, 5, 7, 8, 11] },
    ScaleFormula { name: "melodic minor", intervals: &[0, 2, 3, 5, 7, 9, 11] },
    ScaleFormula { name: "phrygian dominant", intervals: &[0, 1, 4, 5, 7, 8, 10] },
    ScaleFormula { name: "lydian dominant", intervals: &[0, 2, 4, 6, 7, 9, 10] },
    ScaleFormula { name: "altered", intervals: &[0, 1, 3, 4, 6, 8, 10] },
    ScaleFormula { name: "harmonic major", intervals: &[0, 2, 4, 5, 7, 8, 11] },
    ScaleFormula { name: "double harmonic major", intervals: &[0, 1, 4, 5, 7, 8, 11] },
    ScaleFormula { name: "hungarian minor", intervals: &[0, 2, 3, 6, 7, 8, 11] },
    ScaleFormula { name: "hungarian major", intervals: &[0, 3, 4, 6, 7, 9, 10] },
    ScaleFormula { name: "neapolitan major", intervals: &[0, 1, 3, 5, 7, 9, 11] },
    ScaleFormula { name: "neapolitan minor", intervals: &[0, 1, 3, 5, 7, 8, 11] },
    ScaleFormula { name: "enigmatic", intervals: &[0, 1, 4, 6, 8, 10, 11] },
    ScaleFormula { name: "persian", intervals: &[0, 1, 4, 5, 6, 8, 11] },
    ScaleFormula { name: "locrian major", intervals: &[0, 2, 4, 5, 6, 8, 10] },
    ScaleFormula { name: "ultralocrian", intervals: &[0, 1, 3, 4, 6, 8, 9] },
    ScaleFormula { name: "major pentatonic", intervals: &[0, 2, 4, 7, 9] },
    ScaleFormula { name: "minor pentatonic", intervals: &[0, 3, 5, 7, 10] },
    ScaleFormula { name: "blues", intervals: &[0, 3, 5, 6, 7, 10] },
    ScaleFormula { name: "major blues", intervals: &[0, 2, 3, 4, 7, 9] },
    ScaleFormula { name: "egyptian", intervals: &[0, 2, 5, 7, 10] },
    ScaleFormula { name: "hirajoshi", intervals: &[0, 2, 3, 7, 8] },
    ScaleFormula { name: "in-sen", intervals: &[0, 1, 5, 7, 10] },
    ScaleFormula { name: "iwato", intervals: &[0, 1, 5, 6, 10] },
    ScaleFormula { name: "bebop", intervals: &[0, 2, 4, 5, 7, 9, 10, 11] },
    ScaleFormula { name: "bebop major", intervals: &[0, 2, 4, 5, 7, 8, 9, 11] },
    ScaleFormula { name: "bebop minor", intervals: &[0, 2, 3, 4, 5, 7, 9, 10] },
    ScaleFormula { name: "augmented", intervals: &[0, 3, 4, 7, 8, 11] },
    ScaleFormula { name: "prometheus", intervals: &[0, 2, 4, 6, 9, 10] },
    ScaleFormula { name: "whole tone", intervals: &[0, 2, 4, 6, 8, 10] },
    ScaleFormula { name: "diminished", intervals: &[0, 2, 3, 5, 6, 8, 9, 11] },
    ScaleFormula { name: "chromatic", intervals: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11] },
];

/// Alternative names -> canonical table entry
static ALIASES: &[(&str, &str)] = &[
    ("ionian", "major"),
    ("aeolian", "minor"),
    ("natural minor", "minor"),
    ("minor blues", "blues"),
    ("blues minor", "blues"),
    ("super locrian", "altered"),
    ("pentatonic", "major pentatonic"),
    ("spanish", "phrygian dominant"),
    ("byzantine", "double harmonic major"),
    ("gypsy", "hungarian minor"),
    ("bebop dominant", "bebop"),
    ("insen", "in-sen"),
];

/// Canonical names of every formula in the table, in table order
pub fn scale_names() -> impl Iterator<Item = &'static str> {
    FORMULAS.iter().map(|formula| formula.name)
}

impl ScaleFormula {
    /// Look up a formula by name
    ///
    /// # Example
    /// ```
    /// use fretmap::ScaleFormula;
    ///
    /// let dorian = ScaleFormula::lookup("Dorian").unwrap();
    /// assert_eq!(dorian.intervals(), &[0, 2, 3, 5, 7, 9, 10]);
    /// assert!(ScaleFormula::lookup("madeupscale").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<&'static ScaleFormula, FretError> {
        let key = name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        let canonical = ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map_or(key.as_str(), |(_, target)| *target);

        FORMULAS
            .iter()
            .find(|formula| formula.name == canonical)
            .ok_or_else(|| FretError::UnknownScaleFormula(name.trim().to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn intervals(&self) -> &'static [u8] {
        self.intervals
    }

    fn prefers_flats(&self) -> bool {
        self.intervals.contains(&3)
    }

    /// Pitches of one octave of this scale starting at `root`
    pub fn spell(&self, root: Pitch) -> Vec<Pitch> {
        let root_class = root.pitch_class();
        let heptatonic = self.intervals.len() == 7;
        let prefer_flat =
            root_class.alter < 0 || (root_class.alter == 0 && self.prefers_flats());

        self.intervals
            .iter()
            .enumerate()
            .map(|(degree, &offset)| {
                let height = root.height() + i32::from(offset);
                if degree == 0 {
                    root
                } else if heptatonic {
                    Pitch::spelled(root_class.letter.step(degree), height)
                } else {
                    Pitch::from_height(height, prefer_flat)
                }
            })
            .collect()
    }
}

/// Inclusive range of octaves the root is instantiated at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OctaveSpan {
    pub first: i32,
    pub last: i32,
}

impl Default for OctaveSpan {
    /// Six octaves, `0..=5`
    fn default() -> Self {
        Self { first: 0, last: 5 }
    }
}

impl OctaveSpan {
    pub fn new(first: i32, last: i32) -> Result<Self, FretError> {
        Self { first, last }.validate()
    }

    /// Fields are public, so spans built by hand are checked again before use
    pub fn validate(self) -> Result<Self, FretError> {
        if self.last < self.first {
            return Err(FretError::Config(format!(
                "octave span {}..={} is empty",
                self.first, self.last
            )));
        }
        let limits = MIN_OCTAVE..=MAX_OCTAVE;
        if !limits.contains(&self.first) || !limits.contains(&self.last) {
            return Err(FretError::Config(format!(
                "octave span {}..={} must lie within {}..={}",
                self.first, self.last, MIN_OCTAVE, MAX_OCTAVE
            )));
        }
        Ok(self)
    }

    pub fn octaves(&self) -> RangeInclusive<i32> {
        self.first..=self.last
    }
}

impl FromStr for OctaveSpan {
    type Err = FretError;

    /// Parses `"0..=5"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FretError::Config(format!("octave span must look like 0..=5, got '{}'", s));
        let (first, last) = s.trim().split_once("..=").ok_or_else(invalid)?;
        let first = first.trim().parse().map_err(|_| invalid())?;
        let last = last.trim().parse().map_err(|_| invalid())?;
        Self::new(first, last)
    }
}

/// A parsed `"<root> <formula>"` descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleDescriptor {
    pub root: PitchClass,
    pub formula: &'static ScaleFormula,
}

impl ScaleDescriptor {
    /// The formula name is resolved before the root, so a descriptor that is
    /// wrong in both places reports the unknown formula.
    pub fn parse(descriptor: &str) -> Result<Self, FretError> {
        let mut words = descriptor.split_whitespace();
        let root = words.next().unwrap_or("");
        let name = words.collect::<Vec<_>>().join(" ");

        let formula = ScaleFormula::lookup(&name)?;
        let root = PitchClass::parse(root)?;
        Ok(Self { root, formula })
    }

    /// Every scale pitch across the octave span
    pub fn pitches(&self, span: OctaveSpan) -> Result<Vec<Pitch>, FretError> {
        let span = span.validate()?;
        Ok(span
            .octaves()
            .flat_map(|octave| self.formula.spell(Pitch::from_parts(self.root, octave)))
            .collect())
    }
}

impl fmt::Display for ScaleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.formula.name)
    }
}

impl FromStr for ScaleDescriptor {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Expand a descriptor over the default six-octave span
pub fn generate(descriptor: &str) -> Result<Vec<Pitch>, FretError> {
    generate_over(descriptor, OctaveSpan::default())
}

pub fn generate_over(descriptor: &str, span: OctaveSpan) -> Result<Vec<Pitch>, FretError> {
    ScaleDescriptor::parse(descriptor)?.pitches(span)
}
