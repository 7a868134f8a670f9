//! Open-string tunings.
//!
//! String numbers are 1-based and follow the order the tuning was given in.
//! The list is never re-sorted by pitch, so in the standard tuning string 1 is
//! the high E.

use serde::{Serialize, Serializer};

use crate::error::FretError;
use crate::pitch::{Letter, Pitch, PitchClass};

/// Standard six-string guitar tuning, string 1 first
pub const STANDARD_TUNING: [&str; 6] = ["E4", "B3", "G3", "D3", "A2", "E2"];

/// Ordered open-string pitches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    strings: Vec<Pitch>,
}

impl Tuning {
    /// Parse a tuning from pitch names, string 1 first
    ///
    /// # Example
    /// ```
    /// use fretmap::Tuning;
    ///
    /// let drop_d = Tuning::new(&["E4", "B3", "G3", "D3", "A2", "D2"]).unwrap();
    /// assert_eq!(drop_d.num_strings(), 6);
    /// assert_eq!(drop_d.open(6).unwrap().to_string(), "D2");
    /// ```
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, FretError> {
        let strings = names
            .iter()
            .map(|name| Pitch::parse(name.as_ref().trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_pitches(strings)
    }

    pub fn from_pitches(strings: Vec<Pitch>) -> Result<Self, FretError> {
        if strings.is_empty() {
            return Err(FretError::InvalidTuning("a tuning needs at least one string".to_string()));
        }
        Ok(Self { strings })
    }

    /// `E4 B3 G3 D3 A2 E2`
    pub fn standard() -> Self {
        let open = |letter, octave| Pitch::from_parts(PitchClass::new(letter, 0), octave);
        Self {
            strings: vec![
                open(Letter::E, 4),
                open(Letter::B, 3),
                open(Letter::G, 3),
                open(Letter::D, 3),
                open(Letter::A, 2),
                open(Letter::E, 2),
            ],
        }
    }

    pub fn num_strings(&self) -> usize {
        self.strings.len()
    }

    pub fn strings(&self) -> &[Pitch] {
        &self.strings
    }

    /// Open pitch of a 1-based string number
    pub fn open(&self, string: usize) -> Option<&Pitch> {
        string.checked_sub(1).and_then(|index| self.strings.get(index))
    }

    /// `(string number, open pitch)` pairs in string order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Pitch)> {
        self.strings.iter().enumerate().map(|(index, pitch)| (index + 1, pitch))
    }

    /// Open-string names, for axis labels
    pub fn string_labels(&self) -> Vec<String> {
        self.strings.iter().map(Pitch::to_string).collect()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl Serialize for Tuning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.strings.iter().map(Pitch::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_matches_names() {
        assert_eq!(Tuning::new(&STANDARD_TUNING).unwrap(), Tuning::standard());
        assert_eq!(Tuning::default().string_labels(), STANDARD_TUNING.to_vec());
    }

    #[test]
    fn test_order_is_kept() {
        let tuning = Tuning::new(&["E2", "A2", "D3"]).unwrap();
        assert_eq!(tuning.open(1).unwrap().to_string(), "E2");
        assert_eq!(tuning.open(3).unwrap().to_string(), "D3");
        assert!(tuning.open(0).is_none());
        assert!(tuning.open(4).is_none());
        let numbers: Vec<usize> = tuning.iter().map(|(string, _)| string).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_rejects_bad_names_and_empty() {
        assert_eq!(
            Tuning::new(&["E4", "Q3"]),
            Err(FretError::InvalidPitch("Q3".to_string()))
        );
        let empty: [&str; 0] = [];
        assert!(matches!(Tuning::new(&empty), Err(FretError::InvalidTuning(_))));
    }

    #[test]
    fn test_any_length() {
        let bass = Tuning::new(&["G2", "D2", "A1", "E1"]).unwrap();
        assert_eq!(bass.num_strings(), 4);
        let seven = Tuning::new(&["E4", "B3", "G3", "D3", "A2", "E2", "B1"]).unwrap();
        assert_eq!(seven.num_strings(), 7);
    }
}
