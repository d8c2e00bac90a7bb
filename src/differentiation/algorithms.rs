//! Defines the differentiator name and boundary treatment variants.
//!
//! Provides the [`Boundary`] enum, which enumerates how the first and last
//! `M` derivative values are filled where the full stencil does not fit.

/// Name reported for the smooth noise-robust differentiator.
pub const ALGORITHM_NAME: &str = "smooth_noise_robust";

/// Boundary treatment variants.
/// - [`Boundary::Recursive`] lower-order differentiators on the first/last `2M` samples,
///   down to two-point differences at the very edges
/// - [`Boundary::Zero`]      edge values set to `0.0`
/// - [`Boundary::Nearest`]   edge values copied from the nearest interior estimate
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Boundary {
    #[default]
    Recursive,
    Zero,
    Nearest,
}

impl Boundary {
    pub const fn boundary_name(self) -> &'static str {
        match self {
            Boundary::Recursive => "recursive",
            Boundary::Zero      => "zero",
            Boundary::Nearest   => "nearest",
        }
    }
}
impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.boundary_name())
    }
}
