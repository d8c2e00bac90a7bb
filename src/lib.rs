//! Numerical differentiation of sampled, possibly noisy, data.
//!
//! The [`differentiation`] module implements Pavel Holoborodko's smooth
//! noise-robust differentiators: `2M + 1` point stencils that are exact on
//! affine data and suppress high-frequency noise, with lower-order stencils
//! filling in the samples near either end.
//!
//! ```
//! use holodiff::differentiation::derivative;
//!
//! let x: Vec<f64> = (0..10).map(|i| i as f64 * 0.1).collect();
//! let y: Vec<f64> = x.iter().map(|&t| 3.0 * t - 1.0).collect();
//!
//! let dy = derivative(&x, &y, 2)?;
//! assert!(dy.iter().all(|d| (d - 3.0).abs() < 1e-9));
//! # Ok::<(), holodiff::differentiation::DifferentiationError>(())
//! ```

pub mod differentiation;
