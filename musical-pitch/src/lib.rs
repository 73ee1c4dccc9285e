//! Pitch values for composition and notation tools.
//!
//! A [Pitch] is a diatonic/chromatic offset from a fixed C. It can be
//! spelled as a letter name with an accidental (`"F#4"`, `"Bb3"`) using a
//! [NameStrategy], and converted to an equal-tempered frequency.
//!
//! ```
//! # use musical_pitch::{Config, Pitch, FLAT_NAMES, SHARP_NAMES, F, SHARP};
//! let config = Config::default();
//! let pitch = Pitch::new(F, 0, SHARP, &config);
//! assert_eq!(pitch.name(&SHARP_NAMES, &config), "F#4");
//! assert_eq!(pitch.name(&FLAT_NAMES, &config), "Gb4");
//! ```

pub mod config;
pub mod interval;
pub mod pitch;
pub mod strategy;

pub use config::{Config, ACCIDENTAL_NAMES, FANCY_ACCIDENTAL_NAMES};
pub use interval::{diatonic_to_chromatic, Interval};
pub use pitch::{Pitch, PITCH_NAMES};
pub use strategy::{FlatNames, NameStrategy, SharpNames, FLAT_NAMES, SHARP_NAMES};

pub const SEMITONE: i32 = 1;
pub const TONE: i32 = 2;
pub const DITONE: i32 = 3;
pub const TRITONE: i32 = 6;

pub const DOUBLE_FLAT: i32 = -2;
pub const FLAT: i32 = -1;
pub const NATURAL: i32 = 0;
pub const SHARP: i32 = 1;
pub const DOUBLE_SHARP: i32 = 2;

pub const C: i32 = 1;
pub const D: i32 = 2;
pub const E: i32 = 3;
pub const F: i32 = 4;
pub const G: i32 = 5;
pub const A: i32 = 6;
pub const B: i32 = 7;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PitchError {
    #[error(
        "Name strategy returned letter index {index} for semitone \
        {semitone}, expected 0..=6"
    )]
    LetterIndexOutOfRange { semitone: i32, index: i32 },
}
pub type PitchResult<T> = Result<T, PitchError>;
