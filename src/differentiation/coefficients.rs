//! Stencil coefficients for the
//! [smooth noise-robust differentiators](http://www.holoborodko.com/pavel/numerical-methods/numerical-derivative/smooth-low-noise-differentiators/).
//!
//! For order `M` and `m = M - 1`, the weight of the offset pair `±k` is
//!
//! ```text
//! c[k] = (C(2m, m - k + 1) - C(2m, m - k - 1)) / 2^(2m + 1),    k = 1..=M
//! ```
//!
//! These weights make the stencil exact on affine data while
//! rolling off high-frequency noise. Every order satisfies
//! `sum_k k * c[k] == 1/2`.

/// Binomial coefficient `C(n, r)`, zero outside `0 <= r <= n`.
///
/// Evaluated as a running product in `f64`; every partial product is itself a
/// binomial coefficient, so results are exact up to `2^53`.
pub fn binomial(n: i64, r: i64) -> f64 {
    if n < 0 || r < 0 || r > n {
        return 0.0;
    }
    let r = r.min(n - r);
    (1..=r).fold(1.0, |acc, i| acc * (n - r + i) as f64 / i as f64)
}

/// Coefficients `c[1..=order]` of the order-`order` differentiator.
///
/// Returns `order` values, index `k - 1` holding the weight of offset `k`.
/// An order of zero has no offsets and returns an empty vector.
pub fn coefficients(order: usize) -> Vec<f64> {
    if order == 0 {
        return Vec::new();
    }
    let m = order as i64 - 1;
    let scale = 0.5_f64.powi((2 * m + 1) as i32);

    (1..=order as i64)
        .map(|k| scale * (binomial(2 * m, m - k + 1) - binomial(2 * m, m - k - 1)))
        .collect()
}
