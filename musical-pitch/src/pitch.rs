use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Sub},
};

use once_cell::sync::Lazy;

use crate::{
    diatonic_to_chromatic, Config, Interval, NameStrategy, PitchError,
    PitchResult, SHARP_NAMES,
};

pub static PITCH_NAMES: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

/// Frequency ratio of one equal-tempered semitone.
static SEMITONE_RATIO: Lazy<f64> = Lazy::new(|| 2f64.powf(1.0 / 12.0));

/// Absolute pitch, stored as an [Interval] above C of octave 0.
///
/// Pitches compare by semitone count only, so enharmonics (F#4, Gb4) are
/// equal.
#[derive(Debug, Clone, Copy)]
pub struct Pitch {
    interval: Interval,
}
impl Pitch {
    /// `octaves` counts from `config.middle_octave`: 0 is the middle
    /// octave, -1 the one below.
    ///
    /// # Example
    /// ```
    /// # use musical_pitch::{Config, Pitch, A, NATURAL};
    /// let config = Config::default();
    /// assert_eq!(
    ///     Pitch::new(A, 0, NATURAL, &config),
    ///     Pitch::new_absolute(A, 4, NATURAL)
    /// );
    /// ```
    pub fn new(diatonic: i32, octaves: i32, accidental: i32, config: &Config) -> Self {
        Self::new_absolute(diatonic, config.middle_octave, accidental)
            .add_interval(Interval::octave(octaves))
    }

    /// `octave` is taken as is, as in scientific pitch notation.
    pub fn new_absolute(diatonic: i32, octave: i32, accidental: i32) -> Self {
        Self {
            interval: Interval::new(diatonic, octave, accidental),
        }
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }
    pub fn semitones(&self) -> i64 {
        self.interval.semitones()
    }
    pub fn octaves(&self) -> i64 {
        self.interval.octaves()
    }

    pub fn add_interval(&self, interval: Interval) -> Self {
        Self {
            interval: self.interval.add_interval(interval),
        }
    }

    fn semitone_in_octave(&self) -> i32 {
        self.semitones().rem_euclid(12) as i32
    }

    /// Spell as `<Letter>[<Accidental>]<Octave>`, e.g. `"C4"`, `"Bb3"`.
    ///
    /// Letter comes from `strategy`. A letter index outside 0..=6 is
    /// wrapped modulo 7; use [Pitch::try_name] to reject it instead.
    ///
    /// Octave number is the one the pitch was built with, not
    /// recomputed from the spelled letter: `B#3` named by [SHARP_NAMES] is
    /// `"C3"`.
    pub fn name<S>(&self, strategy: &S, config: &Config) -> String
    where
        S: NameStrategy + ?Sized,
    {
        let semitone = self.semitone_in_octave();
        let index = strategy.mapped_index(semitone);
        if !(0..7).contains(&index) {
            log::warn!(
                "name strategy returned letter index {} for semitone {}, wrapping",
                index,
                semitone
            );
        }
        self.render(semitone, index.rem_euclid(7), config)
    }

    /// Same as [Pitch::name], but fails on letter index outside 0..=6.
    ///
    /// # Example
    /// ```
    /// # use musical_pitch::{Config, Pitch, PitchError, C, NATURAL};
    /// let config = Config::default();
    /// let broken = |_: i32| 7;
    /// assert_eq!(
    ///     Pitch::new(C, 0, NATURAL, &config).try_name(&broken, &config),
    ///     Err(PitchError::LetterIndexOutOfRange { semitone: 0, index: 7 })
    /// );
    /// ```
    pub fn try_name<S>(&self, strategy: &S, config: &Config) -> PitchResult<String>
    where
        S: NameStrategy + ?Sized,
    {
        let semitone = self.semitone_in_octave();
        let index = strategy.mapped_index(semitone);
        if !(0..7).contains(&index) {
            return Err(PitchError::LetterIndexOutOfRange { semitone, index });
        }
        Ok(self.render(semitone, index, config))
    }

    fn render(&self, semitone: i32, index: i32, config: &Config) -> String {
        let letter = PITCH_NAMES[index as usize];
        let delta = semitone - diatonic_to_chromatic(index);
        if delta == 0 {
            return format!("{}{}", letter, self.octaves());
        }
        if delta.abs() > 2 {
            log::debug!(
                "accidental of {} semitones on {} aliases in glyph table",
                delta,
                letter
            );
        }
        format!(
            "{}{}{}",
            letter,
            config.accidental_name(delta),
            self.octaves()
        )
    }

    /// Equal-tempered frequency in Hz, anchored at `config.reference_pitch()`.
    ///
    /// # Example
    /// ```
    /// # use musical_pitch::{Config, Pitch, A, NATURAL};
    /// let config = Config::default();
    /// assert_eq!(Pitch::new(A, 0, NATURAL, &config).freq(&config), 440.0);
    /// assert!((Pitch::new(A, -1, NATURAL, &config).freq(&config) - 220.0).abs() < 1e-9);
    /// ```
    pub fn freq(&self, config: &Config) -> f64 {
        let distance = self.semitones() - config.reference_pitch().semitones();
        config.concert_frequency * SEMITONE_RATIO.powf(distance as f64)
    }
}
impl From<Interval> for Pitch {
    fn from(interval: Interval) -> Self {
        Self { interval }
    }
}
impl Add<Interval> for Pitch {
    fn add(self, rhs: Interval) -> Self::Output {
        self.add_interval(rhs)
    }
    type Output = Self;
}
impl Sub<Interval> for Pitch {
    fn sub(self, rhs: Interval) -> Self::Output {
        self.add_interval(rhs.negate())
    }
    type Output = Self;
}
impl PartialEq for Pitch {
    fn eq(&self, other: &Self) -> bool {
        self.semitones() == other.semitones()
    }
}
impl Eq for Pitch {}
impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.semitones().cmp(&other.semitones())
    }
}
impl Hash for Pitch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.semitones().hash(state)
    }
}
impl fmt::Display for Pitch {
    /// Sharp spelling, ASCII accidentals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(&SHARP_NAMES, &Config::default()))
    }
}
