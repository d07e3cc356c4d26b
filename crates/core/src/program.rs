//! Candidate programs as ordered sequences of primitive references.

use crate::{PrimId, PrimitiveSet};
use std::fmt;

/// An ordered sequence of primitive references representing a candidate
/// expression in prefix form: element 0 is the operator and the remainder
/// is its single, recursively evaluated argument.
///
/// Programs are never mutated in place; every transition produces a new,
/// independent sequence so sibling and parent states never alias.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Program(Vec<PrimId>);

impl Program {
    /// The empty program: a valid but unevaluable state.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a program from a sequence of ids.
    pub fn from_ids(ids: impl Into<Vec<PrimId>>) -> Self {
        Self(ids.into())
    }

    /// Number of primitives in the program.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The primitive references in program order.
    pub fn ids(&self) -> &[PrimId] {
        &self.0
    }

    /// A new program with `id` appended at the right end.
    pub fn with_appended(&self, id: PrimId) -> Self {
        let mut ids = self.0.clone();
        ids.push(id);
        Self(ids)
    }

    /// A new program with `id` prepended at the left end, making it the
    /// new operator.
    pub fn with_prepended(&self, id: PrimId) -> Self {
        let mut ids = Vec::with_capacity(self.0.len() + 1);
        ids.push(id);
        ids.extend_from_slice(&self.0);
        Self(ids)
    }

    /// Render the program with primitive names for reporting.
    pub fn display<'a>(&'a self, set: &'a PrimitiveSet) -> ProgramDisplay<'a> {
        ProgramDisplay { program: self, set }
    }
}

/// Displays a program as `[name, name, ...]`.
pub struct ProgramDisplay<'a> {
    program: &'a Program,
    set: &'a PrimitiveSet,
}

impl fmt::Display for ProgramDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, &id) in self.program.ids().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.set.get(id).name())?;
        }
        write!(f, "]")
    }
}
