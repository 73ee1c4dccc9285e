//! Naming and tuning settings shared by pitch queries.

use serde::{Deserialize, Serialize};

use crate::{Pitch, A, NATURAL};

/// Indexed by accidental strength + 2.
pub static ACCIDENTAL_NAMES: [&str; 5] = ["bb", "b", "", "#", "x"];
pub static FANCY_ACCIDENTAL_NAMES: [&str; 5] = ["♭♭", "♭", "", "♯", "𝄪"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Octave number [Pitch::new] counts from.
    pub middle_octave: i32,
    /// Unicode accidentals instead of ASCII.
    pub fancy_accidentals: bool,
    /// Frequency of A natural in the middle octave, Hz.
    pub concert_frequency: f64,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            middle_octave: 4,
            fancy_accidentals: false,
            concert_frequency: 440.0,
        }
    }
}
impl Config {
    pub fn with_middle_octave(mut self, middle_octave: i32) -> Self {
        self.middle_octave = middle_octave;
        self
    }
    pub fn with_fancy_accidentals(mut self, fancy_accidentals: bool) -> Self {
        self.fancy_accidentals = fancy_accidentals;
        self
    }
    pub fn with_concert_frequency(mut self, concert_frequency: f64) -> Self {
        self.concert_frequency = concert_frequency;
        self
    }

    /// A natural in the middle octave, sounding at `concert_frequency`.
    pub fn reference_pitch(&self) -> Pitch {
        Pitch::new_absolute(A, self.middle_octave, NATURAL)
    }

    /// Glyph for accidental of given strength (-2 = double flat ..= 2).
    ///
    /// Strengths outside ±2 wrap around the table: 3 renders as double
    /// flat.
    pub fn accidental_name(&self, delta: i32) -> &'static str {
        let idx = (delta + 2).rem_euclid(ACCIDENTAL_NAMES.len() as i32) as usize;
        match self.fancy_accidentals {
            true => FANCY_ACCIDENTAL_NAMES[idx],
            false => ACCIDENTAL_NAMES[idx],
        }
    }
}
