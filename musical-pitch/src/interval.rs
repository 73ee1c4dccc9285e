//! Displacements in pitch space.
//!
//! An Interval keeps the letter distance (diatonic) apart from the size in
//! semitones (chromatic), so `C..E` and `C..Fb` stay different intervals
//! even though both are four semitones wide.

use std::{
    cmp::Ordering,
    ops::{Add, Neg},
};

use serde::{Deserialize, Serialize};

/// Semitones above C of the natural letters C, D, E, F, G, A, B.
static MAJOR_SCALE: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Where the natural letter at `index` (0 = C) sits inside the octave.
///
/// Index is taken floored modulo 7.
///
/// # Example
/// ```
/// # use musical_pitch::diatonic_to_chromatic;
/// assert_eq!(diatonic_to_chromatic(3), 5);
/// assert_eq!(diatonic_to_chromatic(-1), 11);
/// ```
pub fn diatonic_to_chromatic(index: i32) -> i32 {
    MAJOR_SCALE[index.rem_euclid(7) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    octaves: i64,
    /// letter index, 0..=6
    diatonic: i32,
    /// semitones above the octave's C, accidental included
    chromatic: i64,
}
impl Interval {
    /// Build from 1-based diatonic degree (1 = C / unison), octave and
    /// accidental offset in semitones.
    ///
    /// Degrees past 7 carry into the octave: `new(8, 0, 0)` is one octave.
    ///
    /// Stored 64-bit wide, so no `i32` input overflows.
    pub fn new(diatonic: i32, octaves: i32, accidental: i32) -> Self {
        let degree = diatonic as i64 - 1;
        let diatonic = degree.rem_euclid(7) as i32;
        Self {
            octaves: octaves as i64 + degree.div_euclid(7),
            diatonic,
            chromatic: diatonic_to_chromatic(diatonic) as i64 + accidental as i64,
        }
    }

    pub fn unison() -> Self {
        Self::new(1, 0, 0)
    }

    /// `n` whole octaves, negative goes down.
    pub fn octave(n: i32) -> Self {
        Self::new(1, n, 0)
    }

    /// Perfect unison, fourth, fifth, octave etc. The major/perfect
    /// distinction is not checked: `perfect(3)` equals `major(3)`.
    pub fn perfect(step: i32) -> Self {
        Self::new(step, 0, 0)
    }
    pub fn major(step: i32) -> Self {
        Self::new(step, 0, 0)
    }
    pub fn minor(step: i32) -> Self {
        Self::new(step, 0, -1)
    }
    pub fn augmented(step: i32) -> Self {
        Self::new(step, 0, 1)
    }
    /// One semitone below perfect for 1, 4, 5; below minor otherwise.
    pub fn diminished(step: i32) -> Self {
        match (step as i64 - 1).rem_euclid(7) {
            0 | 3 | 4 => Self::new(step, 0, -1),
            _ => Self::new(step, 0, -2),
        }
    }

    /// Absolute semitone count.
    pub fn semitones(&self) -> i64 {
        self.octaves * 12 + self.chromatic
    }
    pub fn octaves(&self) -> i64 {
        self.octaves
    }
    pub fn diatonic(&self) -> i32 {
        self.diatonic
    }
    pub fn chromatic(&self) -> i64 {
        self.chromatic
    }

    /// Compose two displacements.
    ///
    /// Letter indices carry into octaves, so semitones stay additive and
    /// the octave follows the letter name.
    ///
    /// # Example
    /// ```
    /// # use musical_pitch::Interval;
    /// let b3 = Interval::new(7, 3, 0);
    /// let c4 = b3.add_interval(Interval::minor(2));
    /// assert_eq!(c4, Interval::new(1, 4, 0));
    /// assert_eq!(c4.semitones(), b3.semitones() + 1);
    /// ```
    pub fn add_interval(&self, other: Interval) -> Self {
        let diatonic = self.diatonic + other.diatonic;
        let carry = diatonic.div_euclid(7);
        Self {
            octaves: self.octaves + other.octaves + carry as i64,
            diatonic: diatonic.rem_euclid(7),
            chromatic: self.chromatic + other.chromatic - carry as i64 * 12,
        }
    }

    /// Same distance, opposite direction.
    pub fn negate(&self) -> Self {
        let borrow = if self.diatonic == 0 { 0 } else { 1 };
        let diatonic = (7 - self.diatonic) % 7;
        Self {
            octaves: -self.octaves - borrow,
            diatonic,
            chromatic: borrow * 12 - self.chromatic,
        }
    }
}
impl Add for Interval {
    fn add(self, rhs: Self) -> Self::Output {
        self.add_interval(rhs)
    }
    type Output = Self;
}
impl Neg for Interval {
    fn neg(self) -> Self::Output {
        self.negate()
    }
    type Output = Self;
}
impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Interval {
    /// By size. Structurally different spellings of the same size are
    /// ordered by letter distance, so `Ord` stays consistent with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.semitones()
            .cmp(&other.semitones())
            .then(self.octaves.cmp(&other.octaves))
            .then(self.diatonic.cmp(&other.diatonic))
    }
}

#[cfg(test)]
mod tests {
    use super::{diatonic_to_chromatic, Interval};

    #[test]
    fn scale_table() {
        let v: Vec<i32> = (0..7).map(diatonic_to_chromatic).collect();
        assert_eq!(v, vec![0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(diatonic_to_chromatic(7), 0);
        assert_eq!(diatonic_to_chromatic(-7), 0);
    }

    #[test]
    fn new() {
        let a4 = Interval::new(6, 4, 0);
        assert_eq!(a4.semitones(), 57);
        assert_eq!(a4.octaves(), 4);
        let cb4 = Interval::new(1, 4, -1);
        assert_eq!(cb4.semitones(), 47);
        assert_eq!(cb4.octaves(), 4);
        assert_eq!(Interval::new(1, -1, 0).semitones(), -12);
        assert_eq!(Interval::new(8, 0, 0), Interval::new(1, 1, 0));
        assert_eq!(Interval::new(0, 4, 0), Interval::new(7, 3, 0));
        assert_eq!(Interval::new(8, 0, 0), Interval::perfect(8));
    }

    #[test]
    fn extreme_inputs() {
        let top = Interval::new(i32::MAX, i32::MAX, i32::MAX);
        assert_eq!(top.diatonic(), (i32::MAX as i64 - 1).rem_euclid(7) as i32);
        assert_eq!(
            top.semitones(),
            top.octaves() * 12 + top.chromatic()
        );
        let bottom = Interval::new(i32::MIN, i32::MIN, i32::MIN);
        assert!(bottom.semitones() < i32::MIN as i64 * 12);
        assert_eq!((bottom + top).semitones(), bottom.semitones() + top.semitones());
        assert_eq!(Interval::octave(i32::MAX).semitones(), i32::MAX as i64 * 12);
    }

    #[test]
    fn serde_round_trip() {
        let iv = Interval::new(7, -2, -1);
        let json = serde_json::to_string(&iv).unwrap();
        assert_eq!(json, r#"{"octaves":-2,"diatonic":6,"chromatic":10}"#);
        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iv);
    }

    #[test]
    fn qualities() {
        assert_eq!(Interval::unison().semitones(), 0);
        assert_eq!(Interval::minor(2).semitones(), 1);
        assert_eq!(Interval::major(2).semitones(), 2);
        assert_eq!(Interval::minor(3).semitones(), 3);
        assert_eq!(Interval::major(3).semitones(), 4);
        assert_eq!(Interval::perfect(4).semitones(), 5);
        assert_eq!(Interval::augmented(4).semitones(), 6);
        assert_eq!(Interval::diminished(5).semitones(), 6);
        assert_eq!(Interval::perfect(5).semitones(), 7);
        assert_eq!(Interval::diminished(7).semitones(), 9);
        assert_eq!(Interval::perfect(8), Interval::octave(1));
        assert_eq!(Interval::octave(1).semitones(), 12);
        assert_eq!(Interval::major(10).semitones(), 16);
        assert_eq!(Interval::major(10).octaves(), 1);
        assert_ne!(Interval::augmented(4), Interval::diminished(5));
    }

    #[test]
    fn add() {
        let e4 = Interval::new(3, 4, 0);
        let g4 = e4 + Interval::minor(3);
        assert_eq!(g4, Interval::new(5, 4, 0));
        let d5 = g4 + Interval::perfect(5);
        assert_eq!(d5, Interval::new(2, 5, 0));
        let b4 = Interval::new(7, 4, 0);
        assert_eq!(b4 + Interval::augmented(1), Interval::new(7, 4, 1));
        assert_eq!(
            (Interval::major(3) + Interval::minor(3)) + Interval::major(2),
            Interval::major(3) + (Interval::minor(3) + Interval::major(2)),
        );
        assert_eq!(e4 + Interval::unison(), e4);
    }

    #[test]
    fn negate() {
        for iv in [
            Interval::unison(),
            Interval::minor(2),
            Interval::perfect(5),
            Interval::augmented(4),
            Interval::octave(2),
            Interval::major(10),
        ] {
            assert_eq!(iv + (-iv), Interval::unison(), "{:?}", iv);
            assert_eq!((-iv).semitones(), -iv.semitones());
        }
        let a4 = Interval::new(6, 4, 0);
        assert_eq!(a4 + (-Interval::perfect(5)), Interval::new(2, 4, 0));
    }

    #[test]
    fn ordering() {
        assert!(Interval::minor(2) < Interval::major(2));
        assert!(Interval::octave(-1) < Interval::unison());
    }
}
