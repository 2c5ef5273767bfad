//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options on a non-dividend-paying underlying, with
//! analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Expiry Boundary
//!
//! For T ≤ 0 no formula reaches the d1/d2 helper: the price is the
//! intrinsic value, delta is a step function of moneyness and every other
//! Greek is zero.
//!
//! ## Units
//!
//! Greeks are raw partial derivatives in the input units: vega per unit of
//! σ, rho per unit of r, theta per year of calendar time.

use greeks_core::types::OptionType;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// The two standardised distance terms of the Black-Scholes formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D1D2 {
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    pub d1: f64,
    /// d₂ = d₁ - σ√T
    pub d2: f64,
}

/// Price and all first/second order Greeks for one option.
///
/// Every field equals what the corresponding single-value function returns
/// for the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Present value.
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// -∂V/∂T, per year
    pub theta: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Quantities shared by every formula for one (strike, expiry) pair.
#[derive(Debug, Clone, Copy)]
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    discount: f64,
}

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); strike, expiry and
/// option type are supplied per call. The value is immutable and `Copy`,
/// so it can be shared freely across threads.
///
/// # Examples
/// ```
/// use greeks_engine::analytical::BlackScholes;
/// use greeks_core::types::OptionType;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call = bs.price(100.0, 1.0, OptionType::Call).unwrap();
/// let put = bs.price(100.0, 1.0, OptionType::Put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

#[inline]
fn ensure_finite(name: &'static str, value: f64) -> Result<f64, AnalyticalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticalError::NonFiniteInput { name, value })
    }
}

#[inline]
fn ensure_finite_output(name: &str, value: f64) -> Result<f64, AnalyticalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticalError::NumericalInstability {
            message: format!("{} evaluated to {}", name, value),
        })
    }
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// Only finiteness is checked here. Positivity of spot and volatility
    /// is required once an option has time left (T > 0) and is enforced
    /// by each formula, so expired options can still be valued with a
    /// degenerate market state.
    ///
    /// # Arguments
    /// * `spot` - Current spot price
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `volatility` - Volatility (annualised)
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteInput` if any argument is NaN or infinite
    ///
    /// # Examples
    /// ```
    /// use greeks_engine::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, -0.01, 0.2).is_ok());
    /// assert!(BlackScholes::new(f64::NAN, 0.05, 0.2).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        Ok(Self {
            spot: ensure_finite("spot", spot)?,
            rate: ensure_finite("rate", rate)?,
            volatility: ensure_finite("volatility", volatility)?,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes d₁ and d₂.
    ///
    /// # Errors
    /// - `InvalidExpiry` if expiry ≤ 0
    /// - `InvalidSpot`, `InvalidStrike`, `InvalidVolatility` for
    ///   non-positive S, K or σ
    /// - `NonFiniteInput` if strike or expiry is NaN or infinite
    ///
    /// # Examples
    /// ```
    /// use greeks_engine::analytical::BlackScholes;
    ///
    /// // ATM with r=0: d1 = σ√T / 2
    /// let bs = BlackScholes::new(100.0, 0.0, 0.2).unwrap();
    /// let d = bs.d1_d2(100.0, 1.0).unwrap();
    /// assert!((d.d1 - 0.1).abs() < 1e-12);
    /// assert!((d.d2 + 0.1).abs() < 1e-12);
    /// ```
    pub fn d1_d2(&self, strike: f64, expiry: f64) -> Result<D1D2, AnalyticalError> {
        let strike = ensure_finite("strike", strike)?;
        let expiry = ensure_finite("expiry", expiry)?;
        if expiry <= 0.0 {
            return Err(AnalyticalError::InvalidExpiry { expiry });
        }
        let terms = self.terms(strike, expiry)?;
        Ok(D1D2 {
            d1: terms.d1,
            d2: terms.d2,
        })
    }

    /// Validates the domain and evaluates the shared terms for T > 0.
    fn terms(&self, strike: f64, expiry: f64) -> Result<Terms, AnalyticalError> {
        if self.spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot: self.spot });
        }
        if strike <= 0.0 {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if self.volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: self.volatility,
            });
        }

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;
        let d1 = ensure_finite_output("d1", (log_moneyness + drift) / vol_sqrt_t)?;

        Ok(Terms {
            d1,
            d2: d1 - vol_sqrt_t,
            sqrt_t,
            discount: (-self.rate * expiry).exp(),
        })
    }

    /// Checks strike/expiry and returns the shared terms, or `None` at the
    /// expiry boundary.
    fn prepare(&self, strike: f64, expiry: f64) -> Result<Option<Terms>, AnalyticalError> {
        let strike = ensure_finite("strike", strike)?;
        let expiry = ensure_finite("expiry", expiry)?;
        if expiry <= 0.0 {
            return Ok(None);
        }
        self.terms(strike, expiry).map(Some)
    }

    fn price_from(&self, t: &Terms, strike: f64, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.spot * norm_cdf(t.d1) - strike * t.discount * norm_cdf(t.d2),
            OptionType::Put => strike * t.discount * norm_cdf(-t.d2) - self.spot * norm_cdf(-t.d1),
        }
    }

    fn delta_from(&self, t: &Terms, option_type: OptionType) -> f64 {
        let n_d1 = norm_cdf(t.d1);
        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - 1.0,
        }
    }

    fn gamma_from(&self, t: &Terms) -> f64 {
        norm_pdf(t.d1) / (self.spot * self.volatility * t.sqrt_t)
    }

    fn theta_from(&self, t: &Terms, strike: f64, option_type: OptionType) -> f64 {
        let decay = -(self.spot * norm_pdf(t.d1) * self.volatility) / (2.0 * t.sqrt_t);
        let carry = strike * self.rate * t.discount;
        match option_type {
            OptionType::Call => decay - carry * norm_cdf(t.d2),
            OptionType::Put => decay + carry * norm_cdf(-t.d2),
        }
    }

    fn vega_from(&self, t: &Terms) -> f64 {
        self.spot * norm_pdf(t.d1) * t.sqrt_t
    }

    fn rho_from(&self, t: &Terms, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        let k_t_df = strike * expiry * t.discount;
        match option_type {
            OptionType::Call => k_t_df * norm_cdf(t.d2),
            OptionType::Put => -k_t_df * norm_cdf(-t.d2),
        }
    }

    /// Delta at expiry: 1/0 for a call, -1/0 for a put. S == K gives 0.
    fn expiry_delta(&self, strike: f64, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call if self.spot > strike => 1.0,
            OptionType::Put if self.spot < strike => -1.0,
            _ => 0.0,
        }
    }

    /// Computes the European option price.
    ///
    /// - Call: C = S·N(d₁) - K·e^(-rT)·N(d₂)
    /// - Put: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// For T ≤ 0 returns the intrinsic value max(S-K, 0) or max(K-S, 0).
    ///
    /// The result is not clamped. Far out of the money the two terms cancel
    /// and rounding can leave a value a few ulps below zero (observed down
    /// to about -1e-321); callers needing a hard floor apply `max(0.0)`.
    ///
    /// # Examples
    /// ```
    /// use greeks_engine::analytical::BlackScholes;
    /// use greeks_core::types::OptionType;
    ///
    /// let bs = BlackScholes::new(110.0, 0.01, 0.2).unwrap();
    /// assert_eq!(bs.price(100.0, 0.0, OptionType::Call).unwrap(), 10.0);
    /// ```
    pub fn price(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        match self.prepare(strike, expiry)? {
            None => Ok(option_type.intrinsic(self.spot, strike)),
            Some(t) => ensure_finite_output("price", self.price_from(&t, strike, option_type)),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    ///
    /// At T ≤ 0 a call has delta 1 if S > K, a put has delta -1 if S < K,
    /// and both are 0 otherwise (including the S == K tie).
    pub fn delta(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        match self.prepare(strike, expiry)? {
            None => Ok(self.expiry_delta(strike, option_type)),
            Some(t) => Ok(self.delta_from(&t, option_type)),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts and zero at
    /// T ≤ 0. Grows without bound as T → 0⁺ at the money.
    pub fn gamma(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        match self.prepare(strike, expiry)? {
            None => Ok(0.0),
            Some(t) => ensure_finite_output("gamma", self.gamma_from(&t)),
        }
    }

    /// Computes Theta.
    ///
    /// - Call Theta = -(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·φ(d₁)·σ)/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// This is -∂V/∂T: the change in value per year of calendar time
    /// passing. It is not divided by 365 and not sign-flipped into a
    /// "decay per day" figure. Zero at T ≤ 0.
    pub fn theta(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        match self.prepare(strike, expiry)? {
            None => Ok(0.0),
            Some(t) => ensure_finite_output("theta", self.theta_from(&t, strike, option_type)),
        }
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts and zero at T ≤ 0.
    /// Per unit of volatility, not per percentage point.
    pub fn vega(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        match self.prepare(strike, expiry)? {
            None => Ok(0.0),
            Some(t) => ensure_finite_output("vega", self.vega_from(&t)),
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    ///
    /// Zero at T ≤ 0.
    pub fn rho(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        match self.prepare(strike, expiry)? {
            None => Ok(0.0),
            Some(t) => ensure_finite_output("rho", self.rho_from(&t, strike, expiry, option_type)),
        }
    }

    /// Computes the price and every Greek from one d1/d2 evaluation.
    ///
    /// # Examples
    /// ```
    /// use greeks_engine::analytical::BlackScholes;
    /// use greeks_core::types::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let g = bs.greeks(100.0, 1.0, OptionType::Call).unwrap();
    /// assert_eq!(g.delta, bs.delta(100.0, 1.0, OptionType::Call).unwrap());
    /// ```
    pub fn greeks(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<Greeks, AnalyticalError> {
        let t = match self.prepare(strike, expiry)? {
            None => {
                return Ok(Greeks {
                    price: option_type.intrinsic(self.spot, strike),
                    delta: self.expiry_delta(strike, option_type),
                    ..Greeks::default()
                })
            }
            Some(t) => t,
        };

        Ok(Greeks {
            price: ensure_finite_output("price", self.price_from(&t, strike, option_type))?,
            delta: self.delta_from(&t, option_type),
            gamma: ensure_finite_output("gamma", self.gamma_from(&t))?,
            theta: ensure_finite_output("theta", self.theta_from(&t, strike, option_type))?,
            vega: ensure_finite_output("vega", self.vega_from(&t))?,
            rho: ensure_finite_output("rho", self.rho_from(&t, strike, expiry, option_type))?,
        })
    }
}

/// d₁ and d₂ for the given inputs. See [`BlackScholes::d1_d2`].
pub fn d1_d2(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
) -> Result<D1D2, AnalyticalError> {
    BlackScholes::new(spot, rate, volatility)?.d1_d2(strike, expiry)
}

/// European option price. See [`BlackScholes::price`].
///
/// # Examples
/// ```
/// use greeks_engine::analytical::price;
/// use greeks_core::types::OptionType;
///
/// let p = price(100.0, 100.0, 0.01, 0.2, 1.0, OptionType::Put).unwrap();
/// assert!(p > 0.0);
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    BlackScholes::new(spot, rate, volatility)?.price(strike, expiry, option_type)
}

/// Delta (∂V/∂S). See [`BlackScholes::delta`].
pub fn delta(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    BlackScholes::new(spot, rate, volatility)?.delta(strike, expiry, option_type)
}

/// Gamma (∂²V/∂S²). See [`BlackScholes::gamma`].
pub fn gamma(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
) -> Result<f64, AnalyticalError> {
    BlackScholes::new(spot, rate, volatility)?.gamma(strike, expiry)
}

/// Theta (-∂V/∂T, per year). See [`BlackScholes::theta`].
pub fn theta(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    BlackScholes::new(spot, rate, volatility)?.theta(strike, expiry, option_type)
}

/// Vega (∂V/∂σ). See [`BlackScholes::vega`].
pub fn vega(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
) -> Result<f64, AnalyticalError> {
    BlackScholes::new(spot, rate, volatility)?.vega(strike, expiry)
}

/// Rho (∂V/∂r). See [`BlackScholes::rho`].
pub fn rho(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    BlackScholes::new(spot, rate, volatility)?.rho(strike, expiry, option_type)
}

/// Price and all Greeks in one pass. See [`BlackScholes::greeks`].
pub fn greeks(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    option_type: OptionType,
) -> Result<Greeks, AnalyticalError> {
    BlackScholes::new(spot, rate, volatility)?.greeks(strike, expiry, option_type)
}
