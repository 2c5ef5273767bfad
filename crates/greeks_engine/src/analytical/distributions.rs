//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is built on `statrs`' `erfc`, accurate to about 1e-11 absolute,
//! so second-order finite differences of prices stay well inside 1e-3.

use statrs::function::erf::erfc;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the complementary error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Returns
/// The probability P(X <= x), in range [0, 1].
///
/// # Examples
/// ```
/// use greeks_engine::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use greeks_engine::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
