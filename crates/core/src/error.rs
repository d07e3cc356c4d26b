use thiserror::Error;

/// Errors that can occur while evaluating programs or extracting search results
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthError {
    #[error("cannot evaluate an empty program")]
    EmptyProgram,

    #[error("function primitive `{0}` has no argument to consume")]
    BareFunction(String),

    #[error("atom primitive `{0}` cannot be applied to arguments")]
    AtomApplied(String),

    #[error("score {0} is outside range [0, 1]")]
    InvalidScore(f64),

    #[error("search root has no children (zero iterations, zero length budget, or empty primitive set)")]
    NoChildren,
}

/// Convenience Result type for synthesis operations
pub type Result<T> = std::result::Result<T, SynthError>;
