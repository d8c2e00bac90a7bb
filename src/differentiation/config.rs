//! Shared configuration for differentiation.
//!
//! Provides [`Abscissa`], the two ways of describing sample positions, and
//! [`CommonCfg`] with the default order [`DEFAULT_ORDER`].
//!
//! [`CommonCfg`] — universal fields
//! - `x`     : sample positions, explicit or a uniform step
//! - `y`     : sampled values
//! - `order` : order `M` of the differentiator, stencil spans `2M + 1` points
//!
//! [`CommonCfg::new`] initializes configuration with empty samples and
//! [`DEFAULT_ORDER`].
//!
//! Only shape is validated. Finiteness and ordering of `x`/`y` are left to
//! the caller; coincident positions show up as non-finite derivatives.

use std::borrow::Cow;

use crate::differentiation::errors::DifferentiationError;

pub const DEFAULT_ORDER: usize = 2;

/// Sample positions.
/// - [`Abscissa::Step`]   uniform spacing `h`, expanded to `h * [0, 1, ..., n - 1]`
/// - [`Abscissa::Points`] explicit positions, one per sample
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Abscissa<'a> {
    Step(f64),
    Points(&'a [f64]),
}

impl<'a> Abscissa<'a> {
    /// Number of positions, `None` for a step (matches any sample count).
    pub fn len(&self) -> Option<usize> {
        match self {
            Abscissa::Step(_)   => None,
            Abscissa::Points(p) => Some(p.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Positions for `n` samples; borrowed when explicit.
    pub fn resolve(&self, n: usize) -> Cow<'a, [f64]> {
        match *self {
            Abscissa::Step(h)   => Cow::Owned((0..n).map(|i| h * i as f64).collect()),
            Abscissa::Points(p) => Cow::Borrowed(p),
        }
    }
}

impl Default for Abscissa<'_> {
    fn default() -> Self {
        Abscissa::Points(&[])
    }
}

impl From<f64> for Abscissa<'_> {
    fn from(h: f64) -> Self { Abscissa::Step(h) }
}
impl<'a> From<&'a [f64]> for Abscissa<'a> {
    fn from(p: &'a [f64]) -> Self { Abscissa::Points(p) }
}
impl<'a> From<&'a Vec<f64>> for Abscissa<'a> {
    fn from(p: &'a Vec<f64>) -> Self { Abscissa::Points(p.as_slice()) }
}
impl<'a, const N: usize> From<&'a [f64; N]> for Abscissa<'a> {
    fn from(p: &'a [f64; N]) -> Self { Abscissa::Points(p.as_slice()) }
}


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x     : Abscissa<'a>,
    pub(crate) y     : &'a [f64],
    pub(crate) order : usize,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x     : Abscissa::default(),
            y     : &[],
            order : DEFAULT_ORDER,
        }
    }

    pub(crate) fn from_parts(x: Abscissa<'a>, y: &'a [f64], order: usize) -> Self {
        Self { x, y, order }
    }

    /// Checks the full configuration before a run.
    ///
    /// ┌ `y` non-empty
    /// ├ explicit `x` same length as `y` (an empty `x` reports its zero length)
    /// ├ `order` >= 1
    /// └ `y` holds at least `2 * order + 1` samples
    pub fn validate(&self) -> Result<(), DifferentiationError> {
        let y_len = self.y.len();

        if y_len == 0 {
            return Err(DifferentiationError::EmptyInput);
        }
        if let Some(x_len) = self.x.len() {
            if x_len != y_len {
                return Err(DifferentiationError::UnequalLength { x_len, y_len });
            }
        }
        if self.order == 0 {
            return Err(DifferentiationError::InvalidOrder { got: self.order });
        }
        let need = 2 * self.order + 1;
        if y_len < need {
            return Err(DifferentiationError::InsufficientPoints { got: y_len, need });
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> Abscissa<'a> { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn order(&self) -> usize { self.order }

    // setters
    pub(crate) fn with_x(&mut self, v: Abscissa<'a>) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_order(&mut self, v: usize) { self.order = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self { Self::new() }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::differentiation::errors::DifferentiationError> {
                use $crate::differentiation::errors::DifferentiationError;

                if v.is_empty() {
                    return Err(DifferentiationError::EmptyInput);
                }

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(DifferentiationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x($crate::differentiation::config::Abscissa::Points(v));
                Ok(self)
            }

            /// Uniform spacing; never conflicts with the length of `y`.
            pub fn set_step(mut self, h: f64) -> Self {
                self.common.with_x($crate::differentiation::config::Abscissa::Step(h));
                self
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::differentiation::errors::DifferentiationError> {
                use $crate::differentiation::errors::DifferentiationError;

                if v.is_empty() {
                    return Err(DifferentiationError::EmptyInput);
                }

                if let Some(x_len) = self.common.x.len() {
                    if x_len != 0 && x_len != v.len() {
                        return Err(DifferentiationError::UnequalLength { x_len, y_len: v.len() });
                    }
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_order(
                mut self,
                v: usize,
            ) -> Result<Self, $crate::differentiation::errors::DifferentiationError> {
                use $crate::differentiation::errors::DifferentiationError;

                if v == 0 {
                    return Err(DifferentiationError::InvalidOrder { got: v });
                }

                self.common.with_order(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
