//! # Configuration
//!
//! YAML settings for a fretboard computation. Every key is optional.
//!
//! ```yaml
//! scale: A minor pentatonic
//! tuning: [E4, B3, G3, D3, A2, E2]
//! min-fret: 0
//! max-fret: 12
//! octave-span: 0..=5
//! ```
//!
//! `octave-span` controls which octaves the scale root is instantiated at
//! before fret filtering. The default `0..=5` covers a six-string guitar; widen
//! it for extended-range instruments whose fret window reaches past it.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::api::{compute_view, FretboardView};
use crate::error::FretError;
use crate::fretboard::FretRange;
use crate::scale::OctaveSpan;
use crate::tuning::STANDARD_TUNING;

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    scale: Option<String>,
    tuning: Option<Vec<String>>,
    min_fret: Option<i32>,
    max_fret: Option<i32>,
    octave_span: Option<String>,
}

/// Validated settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub scale: Option<String>,
    pub tuning: Vec<String>,
    pub frets: FretRange,
    pub octaves: OctaveSpan,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: None,
            tuning: STANDARD_TUNING.iter().map(|s| s.to_string()).collect(),
            frets: FretRange::default(),
            octaves: OctaveSpan::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(source: &str) -> Result<Self, FretError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(source).map_err(|e| FretError::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FretError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| FretError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&source)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, FretError> {
        let defaults = Self::default();
        let frets = FretRange::new(
            raw.min_fret.unwrap_or(defaults.frets.min),
            raw.max_fret.unwrap_or(defaults.frets.max),
        )?;
        let octaves = match raw.octave_span {
            Some(span) => span.parse()?,
            None => defaults.octaves,
        };
        Ok(Self {
            scale: raw.scale,
            tuning: raw.tuning.unwrap_or(defaults.tuning),
            frets,
            octaves,
        })
    }

    /// Run the pipeline with these settings
    pub fn compute(&self) -> Result<FretboardView, FretError> {
        let scale = self
            .scale
            .as_deref()
            .ok_or_else(|| FretError::Config("no scale given".to_string()))?;
        compute_view(scale, self.tuning.as_slice(), self.frets, self.octaves)
    }
}
