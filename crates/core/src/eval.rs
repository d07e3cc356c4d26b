//! Recursive program evaluation.
//!
//! Reduces a program to a single value by curried left-fold application:
//! the head of the sequence is the operator and the entire tail is its
//! single, recursively evaluated argument.

use crate::{Apply, PrimId, PrimitiveSet, Program, Result, SynthError};

/// Evaluate a program against a primitive set.
///
/// Evaluation is pure and deterministic. It fails with a shape error when
/// the program violates the arity rules:
/// - the empty program has no value;
/// - a single unary function has no argument to consume;
/// - an atom cannot appear as the operator of a longer sequence.
///
/// Termination follows from the tail being strictly shorter than the
/// sequence it came from.
pub fn evaluate(set: &PrimitiveSet, program: &Program) -> Result<f64> {
    eval_ids(set, program.ids())
}

fn eval_ids(set: &PrimitiveSet, ids: &[PrimId]) -> Result<f64> {
    match ids {
        [] => Err(SynthError::EmptyProgram),
        [only] => match set.get(*only).apply() {
            Apply::Atom(produce) => Ok(produce()),
            Apply::Unary(_) => Err(SynthError::BareFunction(set.get(*only).name().to_string())),
        },
        [head, tail @ ..] => match set.get(*head).apply() {
            Apply::Unary(transform) => {
                let arg = eval_ids(set, tail)?;
                Ok(transform(arg))
            }
            Apply::Atom(_) => Err(SynthError::AtomApplied(set.get(*head).name().to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Primitive;

    struct Fixture {
        set: PrimitiveSet,
        add2: PrimId,
        one: PrimId,
        two: PrimId,
    }

    fn fixture() -> Fixture {
        let mut set = PrimitiveSet::new();
        let add2 = set.push(Primitive::unary("add(2)", |x| 2.0 + x));
        let one = set.push(Primitive::constant("1", 1.0));
        let two = set.push(Primitive::constant("2", 2.0));
        Fixture {
            set,
            add2,
            one,
            two,
        }
    }

    #[test]
    fn test_single_atom() {
        let f = fixture();
        let p = Program::from_ids(vec![f.two]);
        assert_eq!(evaluate(&f.set, &p), Ok(2.0));
    }

    #[test]
    fn test_unary_chain() {
        let f = fixture();
        // add(2)(add(2)(2)) = 6
        let p = Program::from_ids(vec![f.add2, f.add2, f.two]);
        assert_eq!(evaluate(&f.set, &p), Ok(6.0));
    }

    #[test]
    fn test_empty_program_fails() {
        let f = fixture();
        assert_eq!(
            evaluate(&f.set, &Program::empty()),
            Err(SynthError::EmptyProgram)
        );
    }

    #[test]
    fn test_bare_function_fails() {
        let f = fixture();
        let p = Program::from_ids(vec![f.add2]);
        assert_eq!(
            evaluate(&f.set, &p),
            Err(SynthError::BareFunction("add(2)".to_string()))
        );
    }

    #[test]
    fn test_atom_as_operator_fails() {
        let f = fixture();
        let p = Program::from_ids(vec![f.one, f.two]);
        assert_eq!(
            evaluate(&f.set, &p),
            Err(SynthError::AtomApplied("1".to_string()))
        );

        // Same failure buried inside a tail
        let p = Program::from_ids(vec![f.add2, f.two, f.two]);
        assert_eq!(
            evaluate(&f.set, &p),
            Err(SynthError::AtomApplied("2".to_string()))
        );
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let f = fixture();
        let p = Program::from_ids(vec![f.add2, f.one]);
        assert_eq!(evaluate(&f.set, &p), evaluate(&f.set, &p));
    }
}
