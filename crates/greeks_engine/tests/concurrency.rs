//! Concurrent evaluation tests.
//!
//! The engine holds no shared state, so evaluating the same inputs from
//! many threads must give bit-identical results to a sequential run.

use std::thread;

use greeks_core::types::OptionType;
use greeks_engine::analytical::{greeks, greeks_batch, price_batch, Greeks, OptionQuote};

fn grid() -> Vec<OptionQuote> {
    let mut quotes = Vec::new();
    for spot in [80.0, 95.0, 100.0, 105.0, 120.0] {
        for strike in [90.0, 100.0, 110.0] {
            for expiry in [0.0, 1e-4, 0.25, 1.0, 3.0] {
                for option_type in [OptionType::Call, OptionType::Put] {
                    quotes.push(OptionQuote::new(spot, strike, 0.01, 0.2, expiry, option_type));
                }
            }
        }
    }
    quotes
}

fn sequential(quotes: &[OptionQuote]) -> Vec<Greeks> {
    quotes
        .iter()
        .map(|q| greeks(q.spot, q.strike, q.rate, q.volatility, q.expiry, q.option_type).unwrap())
        .collect()
}

#[test]
fn test_scoped_threads_match_sequential() {
    let quotes = grid();
    let reference = sequential(&quotes);

    let results: Vec<Vec<Greeks>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| sequential(&quotes)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker thread panicked"))
            .collect()
    });

    for run in results {
        assert_eq!(run, reference);
    }
}

#[test]
fn test_batch_matches_sequential_under_repetition() {
    let quotes = grid();
    let reference = sequential(&quotes);

    for _ in 0..20 {
        let batch: Vec<Greeks> = greeks_batch(&quotes)
            .into_iter()
            .map(|g| g.unwrap())
            .collect();
        assert_eq!(batch, reference);

        let prices: Vec<f64> = price_batch(&quotes).into_iter().map(|p| p.unwrap()).collect();
        let expected: Vec<f64> = reference.iter().map(|g| g.price).collect();
        assert_eq!(prices, expected);
    }
}
