//! # Public API
//!
//! Entry points that run the whole pipeline:
//!
//! 1. Validate the fret window
//! 2. Parse the scale descriptor and generate its pitches
//! 3. Parse the tuning
//! 4. Project every pitch onto every string
//!
//! - [`compute_placements()`] - placements only
//! - [`compute_view()`] - placements plus everything a renderer needs
//!   (tuning, window, caption summary)
//!
//! Every call is a pure function of its arguments, so callers on different
//! threads can run it concurrently without coordination.
//!
//! ## Example
//! ```rust
//! use fretmap::{compute_placements, FretRange, STANDARD_TUNING};
//!
//! let placements = compute_placements("C major", &STANDARD_TUNING, FretRange::new(0, 12)?)?;
//! assert!(placements.iter().any(|p| p.note.to_string() == "C4" && p.string == 2 && p.fret == 1));
//! # Ok::<(), fretmap::FretError>(())
//! ```

use log::debug;
use serde::Serialize;

use crate::error::FretError;
use crate::fretboard::{place_all, FretRange, Placement};
use crate::pitch::{Pitch, PitchClass};
use crate::scale::{OctaveSpan, ScaleDescriptor};
use crate::tuning::Tuning;

/// Caption data for a rendered fretboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub descriptor: String,
    /// Distinct pitch classes that were placed, in scale-degree order
    pub pitch_classes: Vec<PitchClass>,
}

impl Summary {
    fn new(descriptor: &str, notes: &[Pitch], placements: &[Placement]) -> Self {
        let mut pitch_classes: Vec<PitchClass> = Vec::new();
        for note in notes {
            let pitch_class = note.pitch_class();
            if !pitch_classes.contains(&pitch_class)
                && placements.iter().any(|p| p.note.pitch_class() == pitch_class)
            {
                pitch_classes.push(pitch_class);
            }
        }
        Self {
            descriptor: descriptor.split_whitespace().collect::<Vec<_>>().join(" "),
            pitch_classes,
        }
    }

    /// `"C major: C D E F G A B"`
    pub fn caption(&self) -> String {
        let names: Vec<String> = self.pitch_classes.iter().map(PitchClass::to_string).collect();
        format!("{}: {}", self.descriptor, names.join(" "))
    }
}

/// Everything the rendering side consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FretboardView {
    pub placements: Vec<Placement>,
    pub tuning: Tuning,
    pub range: FretRange,
    pub summary: Summary,
}

/// Compute the fretboard placements of a scale.
///
/// # Errors
/// - [`FretError::InvalidRange`] if `range.max < range.min` or `range.min < 0`
/// - [`FretError::UnknownScaleFormula`] if the scale name is not in the table
/// - [`FretError::InvalidPitch`] if the root or a tuning entry does not parse
/// - [`FretError::InvalidTuning`] if `tuning` is empty
pub fn compute_placements<S: AsRef<str>>(
    descriptor: &str,
    tuning: &[S],
    range: FretRange,
) -> Result<Vec<Placement>, FretError> {
    Ok(compute_view(descriptor, tuning, range, OctaveSpan::default())?.placements)
}

/// Like [`compute_placements()`], over a chosen octave span, returning the
/// full [`FretboardView`].
///
/// A span reaching outside `MIN_OCTAVE..=MAX_OCTAVE` fails with
/// [`FretError::Config`].
pub fn compute_view<S: AsRef<str>>(
    descriptor: &str,
    tuning: &[S],
    range: FretRange,
    octaves: OctaveSpan,
) -> Result<FretboardView, FretError> {
    let range = range.validate()?;
    let scale = ScaleDescriptor::parse(descriptor)?;
    let tuning = Tuning::new(tuning)?;

    let notes = scale.pitches(octaves)?;
    debug!(
        "{}: {} pitches over octaves {}..={}",
        scale,
        notes.len(),
        octaves.first,
        octaves.last
    );

    let placements = place_all(&notes, &tuning, range);
    debug!(
        "{} placement(s) on {} strings, frets {}..={}",
        placements.len(),
        tuning.num_strings(),
        range.min,
        range.max
    );

    let summary = Summary::new(descriptor, &notes, &placements);
    Ok(FretboardView {
        placements,
        tuning,
        range,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::STANDARD_TUNING;

    #[test]
    fn test_summary_in_scale_order() {
        let view = compute_view("G major", &STANDARD_TUNING, FretRange::default(), OctaveSpan::default())
            .unwrap();
        assert_eq!(view.summary.caption(), "G major: G A B C D E F#");
    }

    #[test]
    fn test_summary_only_lists_placed_classes() {
        // E4 alone with frets 0..=1 reaches E and F
        let view = compute_view("C major", &["E4"], FretRange::new(0, 1).unwrap(), OctaveSpan::default())
            .unwrap();
        assert_eq!(view.summary.caption(), "C major: E F");
    }

    #[test]
    fn test_summary_keeps_descriptor_text() {
        let view = compute_view("  A   aeolian ", &STANDARD_TUNING, FretRange::default(), OctaveSpan::default())
            .unwrap();
        assert_eq!(view.summary.descriptor, "A aeolian");
    }

    #[test]
    fn test_range_checked_first() {
        let result = compute_placements("X madeupscale", &STANDARD_TUNING, FretRange { min: 3, max: 1 });
        assert_eq!(result, Err(FretError::InvalidRange { min: 3, max: 1 }));
    }

    #[test]
    fn test_bad_tuning_propagates() {
        let result = compute_placements("C major", &["E4", "nope"], FretRange::default());
        assert_eq!(result, Err(FretError::InvalidPitch("nope".to_string())));
    }

    #[test]
    fn test_narrow_octave_span_limits_placements() {
        let full = compute_view("E minor", &STANDARD_TUNING, FretRange::default(), OctaveSpan::default())
            .unwrap();
        let low = compute_view("E minor", &STANDARD_TUNING, FretRange::default(), OctaveSpan::new(2, 2).unwrap())
            .unwrap();
        assert!(low.placements.len() < full.placements.len());
        assert!(low.placements.iter().all(|p| p.note.height() < 3 * 12 + 4));
    }

    #[test]
    fn test_out_of_range_octave_span_fails() {
        let huge = OctaveSpan { first: 178956970, last: 178956971 };
        let result = compute_view("C major", &STANDARD_TUNING, FretRange::default(), huge);
        assert!(matches!(result, Err(FretError::Config(_))));
    }
}
