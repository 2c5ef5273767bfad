//! Property-based tests for the Black-Scholes formulas.
//!
//! Random market states are drawn from realistic ranges and the no-arbitrage
//! identities and Greek bounds are checked on each draw.

use greeks_core::types::OptionType;
use greeks_engine::analytical::{
    delta, gamma, greeks, price, vega, AnalyticalError, BlackScholes,
};
use proptest::prelude::*;

fn spot_strategy() -> impl Strategy<Value = f64> {
    1.0..500.0
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    -0.05..0.15
}

fn vol_strategy() -> impl Strategy<Value = f64> {
    0.05..1.0
}

fn expiry_strategy() -> impl Strategy<Value = f64> {
    0.01..5.0
}

fn option_type_strategy() -> impl Strategy<Value = OptionType> {
    prop_oneof![Just(OptionType::Call), Just(OptionType::Put)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_put_call_parity_property(
        s in spot_strategy(),
        k in spot_strategy(),
        r in rate_strategy(),
        sigma in vol_strategy(),
        t in expiry_strategy(),
    ) {
        let call = price(s, k, r, sigma, t, OptionType::Call).unwrap();
        let put = price(s, k, r, sigma, t, OptionType::Put).unwrap();
        let forward = s - k * (-r * t).exp();
        prop_assert!(
            (call - put - forward).abs() < 1e-6,
            "C - P = {} but S - K·e^(-rT) = {}", call - put, forward
        );
    }

    #[test]
    fn test_delta_bounds_and_symmetry_property(
        s in spot_strategy(),
        k in spot_strategy(),
        r in rate_strategy(),
        sigma in vol_strategy(),
        t in expiry_strategy(),
    ) {
        let call = delta(s, k, r, sigma, t, OptionType::Call).unwrap();
        let put = delta(s, k, r, sigma, t, OptionType::Put).unwrap();
        prop_assert!((0.0..=1.0).contains(&call));
        prop_assert!((-1.0..=0.0).contains(&put));
        prop_assert!((put - (call - 1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_price_lower_bounds_property(
        s in spot_strategy(),
        k in spot_strategy(),
        r in rate_strategy(),
        sigma in vol_strategy(),
        t in expiry_strategy(),
        option_type in option_type_strategy(),
    ) {
        let p = price(s, k, r, sigma, t, option_type).unwrap();
        let discounted_strike = k * (-r * t).exp();
        let lower = match option_type {
            OptionType::Call => (s - discounted_strike).max(0.0),
            OptionType::Put => (discounted_strike - s).max(0.0),
        };
        prop_assert!(p >= -1e-9, "negative price {}", p);
        prop_assert!(p >= lower - 1e-9, "price {} below bound {}", p, lower);
    }

    #[test]
    fn test_gamma_vega_non_negative_property(
        s in spot_strategy(),
        k in spot_strategy(),
        r in rate_strategy(),
        sigma in vol_strategy(),
        t in expiry_strategy(),
    ) {
        prop_assert!(gamma(s, k, r, sigma, t).unwrap() >= 0.0);
        prop_assert!(vega(s, k, r, sigma, t).unwrap() >= 0.0);
    }

    #[test]
    fn test_expiry_price_is_intrinsic_property(
        s in spot_strategy(),
        k in spot_strategy(),
        r in rate_strategy(),
        sigma in 0.0..1.0_f64,
        t in -1.0..=0.0_f64,
        option_type in option_type_strategy(),
    ) {
        let g = greeks(s, k, r, sigma, t, option_type).unwrap();
        prop_assert_eq!(g.price, option_type.intrinsic(s, k));
        prop_assert_eq!(g.gamma, 0.0);
        prop_assert_eq!(g.theta, 0.0);
        prop_assert_eq!(g.vega, 0.0);
        prop_assert_eq!(g.rho, 0.0);
    }

    #[test]
    fn test_non_positive_volatility_rejected_property(
        s in spot_strategy(),
        k in spot_strategy(),
        r in rate_strategy(),
        sigma in -1.0..=0.0_f64,
        t in expiry_strategy(),
        option_type in option_type_strategy(),
    ) {
        let result = price(s, k, r, sigma, t, option_type);
        prop_assert_eq!(result, Err(AnalyticalError::InvalidVolatility { volatility: sigma }));
    }

    #[test]
    fn test_greeks_bundle_consistent_property(
        s in spot_strategy(),
        k in spot_strategy(),
        r in rate_strategy(),
        sigma in vol_strategy(),
        t in expiry_strategy(),
        option_type in option_type_strategy(),
    ) {
        let bs = BlackScholes::new(s, r, sigma).unwrap();
        let g = bs.greeks(k, t, option_type).unwrap();
        prop_assert_eq!(g.price, bs.price(k, t, option_type).unwrap());
        prop_assert_eq!(g.delta, bs.delta(k, t, option_type).unwrap());
        prop_assert_eq!(g.gamma, bs.gamma(k, t).unwrap());
        prop_assert_eq!(g.theta, bs.theta(k, t, option_type).unwrap());
        prop_assert_eq!(g.vega, bs.vega(k, t).unwrap());
        prop_assert_eq!(g.rho, bs.rho(k, t, option_type).unwrap());
    }
}
