//! Per-producer strategy configuration and documented defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Producer names the default weight table covers.
pub mod producer_names {
    pub const MA_CROSSOVER: &str = "ma_crossover";
    pub const RSI: &str = "rsi";
    pub const MACD: &str = "macd";
    pub const FIBONACCI: &str = "fibonacci";
    pub const BREAKOUT: &str = "breakout";
}

/// Weight a producer gets when it appears in neither the defaults nor the
/// caller's overrides.
pub const FALLBACK_WEIGHT: f64 = 0.2;

/// Configuration for one signal producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub name: String,
    pub enabled: bool,
    /// Raw influence factor, >= 0. Normalized across enabled producers
    /// before use.
    pub weight: f64,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub parameters: HashMap<String, Value>,
}

impl StrategyConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            weight: FALLBACK_WEIGHT,
            parameters: HashMap::new(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight.max(0.0);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }
}

/// Default weights per producer.
pub struct DefaultWeights;

impl DefaultWeights {
    pub const MA_CROSSOVER: f64 = 0.25;
    pub const RSI: f64 = 0.20;
    pub const MACD: f64 = 0.25;
    pub const FIBONACCI: f64 = 0.15;
    pub const BREAKOUT: f64 = 0.15;

    /// Verify the documented defaults sum to 1.0.
    pub fn verify() -> bool {
        (Self::MA_CROSSOVER + Self::RSI + Self::MACD + Self::FIBONACCI + Self::BREAKOUT - 1.0)
            .abs()
            < 0.001
    }
}

/// Default configuration covering the five standard producers, all enabled.
pub fn default_strategy_configs() -> HashMap<String, StrategyConfig> {
    let defaults = [
        (producer_names::MA_CROSSOVER, DefaultWeights::MA_CROSSOVER),
        (producer_names::RSI, DefaultWeights::RSI),
        (producer_names::MACD, DefaultWeights::MACD),
        (producer_names::FIBONACCI, DefaultWeights::FIBONACCI),
        (producer_names::BREAKOUT, DefaultWeights::BREAKOUT),
    ];

    defaults
        .into_iter()
        .map(|(name, weight)| {
            (
                name.to_string(),
                StrategyConfig::new(name).with_weight(weight),
            )
        })
        .collect()
}

/// Current runtime environment, from `HARMONIX_ENV` (default "sandbox").
pub fn get_environment() -> String {
    std::env::var("HARMONIX_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
