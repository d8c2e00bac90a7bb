use thiserror::Error;

/// Differentiation error types.
///
/// ┌ Shape errors    : mismatched or empty sample sequences
/// └ Order errors    : order `M` unusable for the given samples
///
/// Degenerate spacing (coincident `x` values, zero step) is not an error;
/// it surfaces as non-finite values in the derivative.
#[derive(Debug, Error)]
pub enum DifferentiationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("invalid order: must be >= 1. got order={got}")]
    InvalidOrder { got: usize },

    /// Fewer than `2 * order + 1` samples. Exactly `2 * order` would still give
    /// a result from the lower orders alone; it is rejected on purpose so every
    /// accepted input has at least one full-stencil value.
    #[error("insufficient points: got {got}, need at least {need} (2 * order + 1)")]
    InsufficientPoints { got: usize, need: usize },
}
