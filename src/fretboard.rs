//! # Fretboard Mapping
//!
//! Projects pitches onto the strings of a [`Tuning`], keeping every
//! (string, fret) placement that falls inside a [`FretRange`].
//!
//! For a note and a string, `fret = note.height - open.height`. A note can
//! therefore land on anywhere from zero to `num_strings` strings.
//!
//! ## Ordering
//! [`place_all`] keeps the order of its input notes, and for each note lists
//! strings in ascending string number.

use std::ops::RangeInclusive;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::FretError;
use crate::pitch::Pitch;
use crate::tuning::Tuning;

/// Playable fret window, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FretRange {
    pub min: i32,
    pub max: i32,
}

impl FretRange {
    /// Build a checked window: `0 <= min <= max`
    pub fn new(min: i32, max: i32) -> Result<Self, FretError> {
        Self { min, max }.validate()
    }

    pub fn validate(self) -> Result<Self, FretError> {
        if self.min < 0 || self.max < self.min {
            return Err(FretError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(self)
    }

    pub fn contains(&self, fret: i32) -> bool {
        self.min <= fret && fret <= self.max
    }

    pub fn frets(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

impl Default for FretRange {
    /// Open strings through the 12th fret
    fn default() -> Self {
        Self { min: 0, max: 12 }
    }
}

impl FromStr for FretRange {
    type Err = FretError;

    /// Parses `"0-12"` or `"0..=12"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FretError::Config(format!("fret range must look like 0-12, got '{}'", s));
        let s = s.trim();
        // Skip the first char so a negative min like "-1-5" splits after it
        let dash = || {
            s.get(1..)
                .and_then(|tail| tail.find('-'))
                .map(|at| (&s[..at + 1], &s[at + 2..]))
        };
        let (min, max) = s.split_once("..=").or_else(dash).ok_or_else(invalid)?;
        let min = min.trim().parse().map_err(|_| invalid())?;
        let max = max.trim().parse().map_err(|_| invalid())?;
        Self::new(min, max)
    }
}

/// One occurrence of a note at a (string, fret) location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub note: Pitch,
    pub fret: i32,
    /// 1-based string number
    pub string: usize,
}

/// Every placement of a single note within the window
pub fn place_one(note: &Pitch, tuning: &Tuning, range: FretRange) -> Vec<Placement> {
    tuning
        .iter()
        .filter_map(|(string, open)| {
            let fret = note.height() - open.height();
            range.contains(fret).then(|| Placement {
                note: *note,
                fret,
                string,
            })
        })
        .collect()
}

/// Placements of all notes, note order first, then string order
pub fn place_all(notes: &[Pitch], tuning: &Tuning, range: FretRange) -> Vec<Placement> {
    notes
        .iter()
        .flat_map(|note| {
            let placements = place_one(note, tuning, range);
            trace!("{} -> {} placement(s)", note, placements.len());
            placements
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(name: &str) -> Pitch {
        Pitch::parse(name).unwrap()
    }

    #[test]
    fn test_place_one_on_every_reachable_string() {
        let placements = place_one(&pitch("E4"), &Tuning::standard(), FretRange::new(0, 24).unwrap());
        let spots: Vec<(usize, i32)> = placements.iter().map(|p| (p.string, p.fret)).collect();
        assert_eq!(spots, vec![(1, 0), (2, 5), (3, 9), (4, 14), (5, 19), (6, 24)]);
    }

    #[test]
    fn test_place_one_respects_window() {
        let range = FretRange::new(3, 7).unwrap();
        let placements = place_one(&pitch("C4"), &Tuning::standard(), range);
        // B3 +1, G3 +5, D3 +10: only the G string fits
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].string, 3);
        assert_eq!(placements[0].fret, 5);
    }

    #[test]
    fn test_place_one_below_open_string() {
        let placements = place_one(&pitch("C2"), &Tuning::standard(), FretRange::default());
        assert!(placements.is_empty());
    }

    #[test]
    fn test_place_all_keeps_note_then_string_order() {
        let notes = vec![pitch("A2"), pitch("E2")];
        let placements = place_all(&notes, &Tuning::standard(), FretRange::new(0, 5).unwrap());
        let spots: Vec<(String, usize, i32)> = placements
            .iter()
            .map(|p| (p.note.to_string(), p.string, p.fret))
            .collect();
        assert_eq!(
            spots,
            vec![
                ("A2".to_string(), 5, 0),
                ("A2".to_string(), 6, 5),
                ("E2".to_string(), 6, 0),
            ]
        );
    }

    #[test]
    fn test_range_validation() {
        assert_eq!(FretRange::new(5, 2), Err(FretError::InvalidRange { min: 5, max: 2 }));
        assert_eq!(FretRange::new(-1, 2), Err(FretError::InvalidRange { min: -1, max: 2 }));
        assert!(FretRange::new(7, 7).is_ok());
    }

    #[test]
    fn test_range_from_str() {
        assert_eq!("0-12".parse::<FretRange>().unwrap(), FretRange { min: 0, max: 12 });
        assert_eq!("3..=9".parse::<FretRange>().unwrap(), FretRange { min: 3, max: 9 });
        assert!(matches!("9-3".parse::<FretRange>(), Err(FretError::InvalidRange { .. })));
        assert!(matches!("twelve".parse::<FretRange>(), Err(FretError::Config(_))));
    }

    #[test]
    fn test_range_from_str_negative_min() {
        assert_eq!(
            "-1-5".parse::<FretRange>(),
            Err(FretError::InvalidRange { min: -1, max: 5 })
        );
        assert_eq!(
            "-1..=5".parse::<FretRange>(),
            Err(FretError::InvalidRange { min: -1, max: 5 })
        );
        assert!(matches!("-".parse::<FretRange>(), Err(FretError::Config(_))));
    }
}
