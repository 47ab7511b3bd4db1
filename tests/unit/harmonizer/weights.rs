//! Unit tests for weight resolution

use harmonix::config::StrategyConfig;
use harmonix::harmonizer::weights::{effective_configs, resolve_weights};
use std::collections::HashMap;

fn overrides(entries: Vec<StrategyConfig>) -> HashMap<String, StrategyConfig> {
    entries.into_iter().map(|c| (c.name.clone(), c)).collect()
}

#[test]
fn test_defaults_normalize_to_one() {
    let configs = effective_configs(None);
    let weights = resolve_weights(&configs);
    let total: f64 = weights.values().sum();
    assert!((total - 1.0).abs() < 1e-6);
    assert_eq!(weights.len(), 5);
}

#[test]
fn test_arbitrary_positive_weights_normalize_to_one() {
    let configs = effective_configs(Some(&overrides(vec![
        StrategyConfig::new("rsi").with_weight(3.0),
        StrategyConfig::new("macd").with_weight(7.5),
        StrategyConfig::new("ma_crossover").with_weight(12.0),
    ])));
    let weights = resolve_weights(&configs);
    let total: f64 = weights.values().sum();
    assert!((total - 1.0).abs() < 1e-6);
    // Heavier raw weight keeps its relative dominance after normalization.
    assert!(weights["ma_crossover"] > weights["rsi"]);
}

#[test]
fn test_disabled_producer_excluded() {
    let configs = effective_configs(Some(&overrides(vec![
        StrategyConfig::new("rsi").disabled(),
    ])));
    let weights = resolve_weights(&configs);
    assert!(!weights.contains_key("rsi"));
    assert_eq!(weights.len(), 4);
    let total: f64 = weights.values().sum();
    assert!((total - 1.0).abs() < 1e-6);
}

#[test]
fn test_all_zero_weights_do_not_divide_by_zero() {
    let configs = effective_configs(Some(&overrides(vec![
        StrategyConfig::new("ma_crossover").with_weight(0.0),
        StrategyConfig::new("rsi").with_weight(0.0),
        StrategyConfig::new("macd").with_weight(0.0),
        StrategyConfig::new("fibonacci").with_weight(0.0),
        StrategyConfig::new("breakout").with_weight(0.0),
    ])));
    let weights = resolve_weights(&configs);
    assert_eq!(weights.len(), 5);
    assert!(weights.values().all(|w| *w == 0.0));
}

#[test]
fn test_unmentioned_producers_keep_defaults() {
    let configs = effective_configs(Some(&overrides(vec![
        StrategyConfig::new("rsi").with_weight(0.9),
    ])));
    assert_eq!(configs["macd"].weight, harmonix::config::DefaultWeights::MACD);
    assert_eq!(configs["rsi"].weight, 0.9);
}
