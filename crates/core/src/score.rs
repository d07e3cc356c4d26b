//! Goal scores with the [0, 1] range enforced at the type level.

use crate::{Result, SynthError};

/// A goal score for a candidate program.
///
/// Invariant: the score is in range [0, 1] where:
/// - 1 means the goal is perfectly satisfied
/// - 0 means the program is worthless (including structurally invalid)
///
/// # Example
/// ```
/// use synth_core::Score;
///
/// let score = Score::new(0.5).unwrap();
/// assert!(!score.is_perfect());
/// assert!(Score::PERFECT.is_perfect());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    /// Score for a worthless or malformed program.
    pub const ZERO: Self = Self(0.0);

    /// Score for a program that satisfies the goal exactly.
    pub const PERFECT: Self = Self(1.0);

    /// Create a new score.
    ///
    /// # Errors
    /// Returns `SynthError::InvalidScore` if the value is outside [0, 1].
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(SynthError::InvalidScore(value));
        }
        Ok(Self(value))
    }

    /// Create a score by clamping to [0, 1].
    ///
    /// Use this for distance-based goals whose raw formula can go negative
    /// or drift slightly above 1 through floating point error. NaN maps to
    /// zero so that goals stay total even over pathological arithmetic.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Get the underlying value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Whether this score satisfies the goal exactly.
    pub fn is_perfect(self) -> bool {
        self.0 >= 1.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> f64 {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        assert!(Score::new(0.0).is_ok());
        assert!(Score::new(0.5).is_ok());
        assert!(Score::new(1.0).is_ok());
    }

    #[test]
    fn test_new_invalid() {
        assert!(Score::new(-0.1).is_err());
        assert!(Score::new(1.1).is_err());
        assert!(Score::new(f64::NAN).is_err());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Score::clamped(-0.5).get(), 0.0);
        assert_eq!(Score::clamped(1.5).get(), 1.0);
        assert_eq!(Score::clamped(0.25).get(), 0.25);
        assert_eq!(Score::clamped(f64::NAN).get(), 0.0);
    }

    #[test]
    fn test_is_perfect() {
        assert!(Score::PERFECT.is_perfect());
        assert!(!Score::ZERO.is_perfect());
        assert!(!Score::clamped(0.999).is_perfect());
    }
}
