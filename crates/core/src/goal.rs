//! The goal function boundary.

use crate::{PrimitiveSet, Program, Score};

/// A fitness function over candidate programs.
///
/// Implementations must be total and pure: a structurally invalid program
/// scores [`Score::ZERO`] rather than surfacing the evaluator's error. The
/// search relies on this contract to treat malformed programs as merely
/// bad, never fatal.
pub trait Goal {
    /// Score a candidate program in [0, 1].
    fn score(&self, set: &PrimitiveSet, program: &Program) -> Score;
}

impl<F> Goal for F
where
    F: Fn(&PrimitiveSet, &Program) -> Score,
{
    fn score(&self, set: &PrimitiveSet, program: &Program) -> Score {
        self(set, program)
    }
}
