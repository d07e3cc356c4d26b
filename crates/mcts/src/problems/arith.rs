//! Arithmetic target synthesis.
//!
//! A small benchmark problem: primitives {add(2), 1, 2}, goal value 6. The
//! target is reachable exactly as add(2)(add(2)(2)) inside a length budget
//! of 5, which makes this a convenient end-to-end check that the search
//! converges on a perfect score.

use synth_core::{evaluate, Goal, Primitive, PrimitiveSet, Program, Score};

/// Curried addition with its first operand bound at construction time:
/// `adder(a)` is the unary primitive mapping `b` to `a + b`.
pub fn adder(operand: f64) -> Primitive {
    Primitive::unary(format!("add({operand})"), move |x| operand + x)
}

/// The demo alphabet: {add(2), 1, 2}.
pub fn arith_primitives() -> PrimitiveSet {
    [
        adder(2.0),
        Primitive::constant("1", 1.0),
        Primitive::constant("2", 2.0),
    ]
    .into_iter()
    .collect()
}

/// Distance goal over evaluated program values.
///
/// Scores `1 - |evaluate(p) - target| / max(|target|, 1)` clipped to
/// [0, 1]. Malformed programs score zero; the goal never fails.
pub struct TargetGoal {
    target: f64,
}

impl TargetGoal {
    pub fn new(target: f64) -> Self {
        Self { target }
    }
}

impl Goal for TargetGoal {
    fn score(&self, set: &PrimitiveSet, program: &Program) -> Score {
        match evaluate(set, program) {
            Ok(value) => {
                let spread = self.target.abs().max(1.0);
                Score::clamped(1.0 - (value - self.target).abs() / spread)
            }
            Err(_) => Score::ZERO,
        }
    }
}
