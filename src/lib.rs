pub mod api;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod pitch;
pub mod render;
pub mod scale;
pub mod tuning;

pub use api::{compute_placements, compute_view, FretboardView, Summary};
pub use config::Config;
pub use error::*;
pub use fretboard::{place_all, place_one, FretRange, Placement};
pub use pitch::{Letter, Pitch, PitchClass, MAX_OCTAVE, MIN_OCTAVE};
pub use render::{Render, TextDiagram};
pub use scale::{generate, generate_over, scale_names, OctaveSpan, ScaleDescriptor, ScaleFormula};
pub use tuning::{Tuning, STANDARD_TUNING};
