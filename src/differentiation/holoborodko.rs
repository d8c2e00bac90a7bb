//! Smooth Noise-Robust Differentiation
//!
//! Implements Pavel Holoborodko's
//! [smooth noise-robust differentiators](http://www.holoborodko.com/pavel/numerical-methods/numerical-derivative/smooth-low-noise-differentiators/)
//! for sampled data `(x, y)`.
//!
//! An order-`M` differentiator spans `2M + 1` samples. At every sample `i`
//! with `M` neighbours on each side,
//!
//! ```text
//! df[i] = sum_{k=1..M} 2k c[k] (y[i+k] - y[i-k]) / (x[i+k] - x[i-k])
//! ```
//!
//! with `c` from [`coefficients`]. The first and last `M` samples are filled
//! according to [`Boundary`]; by default with the order `M - 1`
//! differentiator applied to the first/last `2M` samples, recursing down to
//! two-point differences at the very edges.

use log::{debug, trace, warn};

use crate::differentiation::algorithms::{Boundary, ALGORITHM_NAME};
use crate::differentiation::coefficients::coefficients;
use crate::differentiation::config::{impl_common_cfg, non_finite_idx, Abscissa, CommonCfg};
use crate::differentiation::errors::DifferentiationError;
use crate::differentiation::report::DifferentiationReport;


/// Smooth noise-robust differentiator configuration
///
/// # Fields
/// - `common`   : [`CommonCfg`]
/// - `boundary` : [`Boundary`] treatment of the first/last `order` values
///
/// # Construction
/// - Use [`HoloborodkoCfg::new`] then setters.
///
/// # Defaults
/// - order [`crate::differentiation::config::DEFAULT_ORDER`]
/// - [`Boundary::Recursive`]
#[derive(Debug, Clone, Copy)]
pub struct HoloborodkoCfg<'a> {
    common: CommonCfg<'a>,
    boundary: Boundary,
}
impl<'a> HoloborodkoCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), boundary: Boundary::default() }
    }

    pub fn set_boundary(mut self, v: Boundary) -> Self {
        self.boundary = v;
        self
    }

    pub fn common(&self) -> &CommonCfg<'a> { &self.common }
    pub fn boundary(&self) -> Boundary { self.boundary }
}
impl Default for HoloborodkoCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(HoloborodkoCfg<'a>);


/// Estimates `dy/dx` at every sample.
///
/// `x` is either a uniform step (`f64`) or the sample positions
/// (`&[f64]`, `&Vec<f64>`, `&[f64; N]`).
///
/// # Returns
/// Derivative with the same length as `y`, boundaries filled by
/// [`Boundary::Recursive`].
///
/// # Errors
/// - [`DifferentiationError::EmptyInput`] if `y` (or explicit `x`) is empty.
/// - [`DifferentiationError::UnequalLength`] if explicit `x` and `y` differ in length.
/// - [`DifferentiationError::InvalidOrder`] if `order == 0`.
/// - [`DifferentiationError::InsufficientPoints`] if `y` has fewer than `2 * order + 1` samples.
///
/// Coincident positions are not detected and yield infinite or NaN values.
pub fn derivative<'a, X>(x: X, y: &'a [f64], order: usize) -> Result<Vec<f64>, DifferentiationError>
where X: Into<Abscissa<'a>> {
    let common = CommonCfg::from_parts(x.into(), y, order);
    common.validate()?;
    Ok(run(&common, Boundary::Recursive))
}

/// Differentiates the data in [`HoloborodkoCfg`].
///
/// # Returns
/// [`DifferentiationReport`] containing
/// - `algorithm_name` : `"smooth_noise_robust"`
/// - `boundary_name`  : name of the configured [`Boundary`]
/// - `order`, `stencil_width`, `n_provided`, `n_interior`
/// - `derivative`     : estimated derivative, same length as `y`
///
/// # Errors
/// Same as [`derivative`]; checked via [`CommonCfg::validate`].
pub fn differentiate(cfg: HoloborodkoCfg) -> Result<DifferentiationReport, DifferentiationError> {
    cfg.common.validate()?;

    let mut report = DifferentiationReport::new(
        cfg.boundary,
        cfg.common.order(),
        cfg.common.y().len(),
    );
    report.derivative = run(&cfg.common, cfg.boundary);

    Ok(report)
}


/// Runs a validated configuration.
fn run(common: &CommonCfg, boundary: Boundary) -> Vec<f64> {
    let y     = common.y();
    let order = common.order();
    let x     = common.x().resolve(y.len());

    debug!(
        "{ALGORITHM_NAME}: order={order}, samples={}, boundary={boundary}",
        y.len()
    );

    let df = estimate(&x, y, order, boundary);

    if let Some(idx) = non_finite_idx(&df) {
        warn!(
            "{ALGORITHM_NAME}: non-finite derivative at index {idx}; check for coincident x values"
        );
    }
    df
}

/// Order-`order` estimate over `x`, `y`.
///
/// Requires `y.len() >= 2 * order` and `x.len() == y.len()`; recursive calls
/// pass exactly `2 * order` samples.
fn estimate(x: &[f64], y: &[f64], order: usize, boundary: Boundary) -> Vec<f64> {
    let n = y.len();
    let mut df = vec![0.0; n];

    apply_stencil(x, y, order, &mut df[order..n - order]);

    match boundary {
        Boundary::Recursive => fill_recursive(x, y, order, &mut df),
        Boundary::Zero      => fill_zero(order, &mut df),
        Boundary::Nearest   => fill_nearest(order, &mut df),
    }
    df
}

/// Accumulates each offset's contribution over the whole interior at once.
fn apply_stencil(x: &[f64], y: &[f64], order: usize, interior: &mut [f64]) {
    let n = y.len();

    for (idx, &ck) in coefficients(order).iter().enumerate() {
        let k = idx + 1;
        let scale = 2.0 * k as f64 * ck;

        let (hi_start, hi_end) = (order + k, n - order + k);
        let (lo_start, lo_end) = (order - k, n - order - k);

        let dy = window(y, hi_start, hi_end).iter().zip(window(y, lo_start, lo_end));
        let dx = window(x, hi_start, hi_end).iter().zip(window(x, lo_start, lo_end));

        for (d, ((yr, yl), (xr, xl))) in interior.iter_mut().zip(dy.zip(dx)) {
            *d += scale * (yr - yl) / (xr - xl);
        }
    }
}

/// `values[start..end]`, aligned with the interior.
///
/// For the outermost offset (`k == order`) the right-shifted window ends at
/// the last sample, i.e. `end == values.len()`: take through the end.
#[inline]
fn window(values: &[f64], start: usize, end: usize) -> &[f64] {
    if end == values.len() {
        &values[start..]
    } else {
        &values[start..end]
    }
}

#[inline]
fn two_point(x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    (y1 - y0) / (x1 - x0)
}

fn fill_recursive(x: &[f64], y: &[f64], order: usize, df: &mut [f64]) {
    let n = y.len();

    if order > 1 {
        let span = 2 * order;
        trace!("{ALGORITHM_NAME}: boundary descent to order {} over {span} samples", order - 1);

        let lo = estimate(&x[..span], &y[..span], order - 1, Boundary::Recursive);
        let hi = estimate(&x[n - span..], &y[n - span..], order - 1, Boundary::Recursive);

        df[..order].copy_from_slice(&lo[..order]);
        df[n - order..].copy_from_slice(&hi[order..]);
    } else {
        df[0]     = two_point(x[0], x[1], y[0], y[1]);
        df[n - 1] = two_point(x[n - 2], x[n - 1], y[n - 2], y[n - 1]);
    }
}

fn fill_zero(order: usize, df: &mut [f64]) {
    let n = df.len();
    df[..order].fill(0.0);
    df[n - order..].fill(0.0);
}

/// Copies the outermost interior estimates outward.
fn fill_nearest(order: usize, df: &mut [f64]) {
    let n = df.len();
    let (first, last) = (df[order], df[n - order - 1]);
    df[..order].fill(first);
    df[n - order..].fill(last);
}
