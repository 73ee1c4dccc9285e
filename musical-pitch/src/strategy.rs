//! Enharmonic spelling conventions.
//!
//! A strategy decides which natural letter a chromatic semitone is spelled
//! from: semitone 6 can be F# (letter 3) or Gb (letter 4).

/// Maps semitone inside the octave (0..=11) to letter index (0 = C ..= 6 = B).
///
/// Any `Fn(i32) -> i32` is a strategy too:
/// ```
/// # use musical_pitch::{Config, Pitch, C, SHARP};
/// // spell everything from the nearest lower white key, like a keyboard
/// // player calling B# a "C"
/// let lower_white = |semitone: i32| [0, 0, 1, 1, 2, 3, 3, 4, 4, 5, 5, 6][semitone as usize];
/// let config = Config::default();
/// assert_eq!(Pitch::new(C, 0, SHARP, &config).name(&lower_white, &config), "C#4");
/// ```
pub trait NameStrategy {
    fn mapped_index(&self, semitone_in_octave: i32) -> i32;
}
impl<F> NameStrategy for F
where
    F: Fn(i32) -> i32,
{
    fn mapped_index(&self, semitone_in_octave: i32) -> i32 {
        self(semitone_in_octave)
    }
}

static NAMES_FOR_FLATS: [i32; 12] = [0, 1, 1, 2, 2, 3, 4, 4, 5, 5, 6, 6];
static NAMES_FOR_SHARPS: [i32; 12] = [0, 0, 1, 1, 2, 3, 3, 4, 4, 5, 5, 6];

/// Black keys spelled as flats: C Db D Eb E F Gb G Ab A Bb B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlatNames;
impl NameStrategy for FlatNames {
    fn mapped_index(&self, semitone_in_octave: i32) -> i32 {
        NAMES_FOR_FLATS[semitone_in_octave.rem_euclid(12) as usize]
    }
}

/// Black keys spelled as sharps: C C# D D# E F F# G G# A A# B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SharpNames;
impl NameStrategy for SharpNames {
    fn mapped_index(&self, semitone_in_octave: i32) -> i32 {
        NAMES_FOR_SHARPS[semitone_in_octave.rem_euclid(12) as usize]
    }
}

pub const FLAT_NAMES: FlatNames = FlatNames;
pub const SHARP_NAMES: SharpNames = SharpNames;
