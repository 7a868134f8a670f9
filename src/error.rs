//! # Error Types
//!
//! This module defines all error types for fretboard mapping.
//!
//! Every error is raised where it is detected and handed back to the caller
//! unchanged. Nothing in the pipeline substitutes a default for bad input.
//!
//! ## Error Types
//! - `InvalidPitch` - A pitch or pitch-class name could not be parsed
//! - `UnknownScaleFormula` - The scale descriptor names a formula that is not in the table
//! - `InvalidRange` - The fret window is empty or starts below fret 0
//! - `InvalidTuning` - The tuning has no strings
//! - `Config` - A configuration file could not be read or decoded
//!
//! ## Usage
//! ```rust
//! use fretmap::{compute_placements, FretError, FretRange, STANDARD_TUNING};
//!
//! match compute_placements("C major", &STANDARD_TUNING, FretRange { min: 5, max: 2 }) {
//!     Ok(placements) => println!("{} placements", placements.len()),
//!     Err(FretError::InvalidRange { min, max }) => {
//!         eprintln!("bad window {}..{}", min, max);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FretError {
    /// Malformed pitch name.
    ///
    /// # Example
    /// ```
    /// # use fretmap::FretError;
    /// let err = FretError::InvalidPitch("H4".to_string());
    /// assert_eq!(err.to_string(), "Invalid pitch: 'H4'");
    /// ```
    #[error("Invalid pitch: '{0}'")]
    InvalidPitch(String),

    /// The scale descriptor names a formula absent from the table.
    ///
    /// # Example
    /// ```
    /// # use fretmap::FretError;
    /// let err = FretError::UnknownScaleFormula("madeupscale".to_string());
    /// assert_eq!(err.to_string(), "Unknown scale formula: 'madeupscale'");
    /// ```
    #[error("Unknown scale formula: '{0}'")]
    UnknownScaleFormula(String),

    /// The fret window has `max < min` or a negative `min`.
    #[error("Invalid fret range: {min}..{max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    /// Configuration file could not be read or decoded.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
