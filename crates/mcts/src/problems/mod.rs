//! Built-in synthesis problems for validating the search.

mod arith;

pub use arith::{adder, arith_primitives, TargetGoal};
