//! Primitive definitions and the primitive set.
//!
//! A primitive is an immutable named capability: either an atom that
//! produces a value, or a unary function that maps one evaluated value to
//! another. Primitives are constructed once before a search and shared
//! read-only for its whole lifetime.

use std::fmt;

/// Index into a [`PrimitiveSet`].
///
/// This is a lightweight handle that references a primitive in the set.
/// Ids are only minted by [`PrimitiveSet::push`], so a `PrimId` held
/// together with the set it came from is always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimId(pub(crate) usize);

impl PrimId {
    /// Position of the primitive inside its set.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Executable behavior of a primitive.
pub enum Apply {
    /// Zero-argument producer of a value.
    Atom(Box<dyn Fn() -> f64 + Send + Sync>),
    /// One-argument transform from value to value.
    Unary(Box<dyn Fn(f64) -> f64 + Send + Sync>),
}

/// An immutable named capability drawn from during the search.
///
/// The curried-function pattern (`add(a)` returning a function awaiting
/// `b`) is expressed here by binding the first argument at construction
/// time: every unary primitive consumes exactly one evaluated argument and
/// returns a plain value.
pub struct Primitive {
    name: String,
    apply: Apply,
}

impl Primitive {
    /// Create an atom primitive from a producer function.
    pub fn atom(name: impl Into<String>, f: impl Fn() -> f64 + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            apply: Apply::Atom(Box::new(f)),
        }
    }

    /// Create an atom primitive that always produces the given value.
    pub fn constant(name: impl Into<String>, value: f64) -> Self {
        Self::atom(name, move || value)
    }

    /// Create a unary function primitive.
    pub fn unary(name: impl Into<String>, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            apply: Apply::Unary(Box::new(f)),
        }
    }

    /// Display identifier (diagnostic only, no semantic role).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this primitive is an atom.
    pub fn is_atom(&self) -> bool {
        matches!(self.apply, Apply::Atom(_))
    }

    /// Executable behavior, consumed by the evaluator.
    pub fn apply(&self) -> &Apply {
        &self.apply
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_atom() { "atom" } else { "unary" };
        write!(f, "Primitive({} {})", kind, self.name)
    }
}

/// An ordered, immutable collection of primitives.
///
/// Primitives are stored in a contiguous vector and referenced by
/// [`PrimId`]. Iteration order is insertion order; it affects only action
/// enumeration and tie-breaking during the search, never correctness.
#[derive(Debug, Default)]
pub struct PrimitiveSet {
    prims: Vec<Primitive>,
}

impl PrimitiveSet {
    /// Create an empty primitive set.
    pub fn new() -> Self {
        Self { prims: Vec::new() }
    }

    /// Add a primitive to the set, returning its id.
    pub fn push(&mut self, prim: Primitive) -> PrimId {
        let id = PrimId(self.prims.len());
        self.prims.push(prim);
        id
    }

    /// Get a reference to a primitive by id.
    ///
    /// # Panics
    /// Panics if the PrimId does not belong to this set.
    pub fn get(&self, id: PrimId) -> &Primitive {
        &self.prims[id.0]
    }

    /// Number of primitives in the set.
    pub fn len(&self) -> usize {
        self.prims.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    /// Iterate over all ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = PrimId> {
        (0..self.prims.len()).map(PrimId)
    }
}

impl FromIterator<Primitive> for PrimitiveSet {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            prims: iter.into_iter().collect(),
        }
    }
}
