//! Defines the struct returned by [`crate::differentiation::holoborodko::differentiate`].
//!
//! The report summarizes the differentiator used, its order and stencil,
//! how many samples were provided and how many were covered by the full
//! stencil, alongside the derivative itself.

use crate::differentiation::algorithms::{Boundary, ALGORITHM_NAME};

/// Summary of a differentiation run.
///
/// [`DifferentiationReport`]
/// - `algorithm_name` : name of the differentiator (`"smooth_noise_robust"`)
/// - `boundary_name`  : boundary treatment used for the first/last `order` values
/// - `order`          : order `M` of the differentiator
/// - `stencil_width`  : points used by the full stencil, `2M + 1`
/// - `n_provided`     : number of input samples
/// - `n_interior`     : number of values computed with the full stencil
/// - `derivative`     : estimated derivative at each sample
#[derive(Debug, Clone)]
pub struct DifferentiationReport {
    pub algorithm_name: &'static str,
    pub boundary_name: &'static str,
    pub order: usize,
    pub stencil_width: usize,
    pub n_provided: usize,
    pub n_interior: usize,
    pub derivative: Vec<f64>,
}

impl DifferentiationReport {
    pub fn new(boundary: Boundary, order: usize, n_provided: usize) -> Self {
        Self {
            algorithm_name: ALGORITHM_NAME,
            boundary_name: boundary.boundary_name(),
            order,
            stencil_width: 2 * order + 1,
            n_provided,
            n_interior: n_provided.saturating_sub(2 * order),
            derivative: Vec::new(),
        }
    }
}
