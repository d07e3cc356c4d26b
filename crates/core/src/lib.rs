//! Synth Core - Program representation and evaluation.
//!
//! This crate provides the symbolic-program model searched over by the
//! `synth-mcts` engine: named primitives (atoms and unary functions),
//! programs as ordered sequences of primitive references, the recursive
//! evaluator that reduces a program to a value, and the goal-function
//! boundary that scores candidates in [0, 1].
//!
//! # Types
//!
//! - [`Primitive`] / [`PrimitiveSet`] - the alphabet the search draws from
//! - [`Program`] - a candidate expression in prefix form
//! - [`evaluate`] - curried left-fold reduction of a program to a value
//! - [`Goal`] - trait for total, non-panicking fitness functions
//! - [`Score`] - goal score with the [0, 1] invariant enforced

mod error;
mod eval;
mod goal;
mod primitive;
mod program;
mod score;

pub use error::{Result, SynthError};
pub use eval::evaluate;
pub use goal::Goal;
pub use primitive::{Apply, PrimId, Primitive, PrimitiveSet};
pub use program::{Program, ProgramDisplay};
pub use score::Score;
