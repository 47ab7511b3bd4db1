//! Signal data models: per-producer opinions and the harmonized output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use serde_json::Value;

/// Directional opinion of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalType {
    Buy,
    Sell,
    Hold,
}

impl std::fmt::Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalType::Buy => write!(f, "BUY"),
            SignalType::Sell => write!(f, "SELL"),
            SignalType::Hold => write!(f, "HOLD"),
        }
    }
}

/// Analytical family of the indicator behind a signal.
///
/// Attached explicitly by each producer at signal creation time; conflict
/// detection never infers the category from indicator names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Structure,
}

/// One producer's directional opinion with strength and confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingSignal {
    pub symbol: String,
    /// Name of the strategy that generated this signal. Must match the
    /// producer's configured name so weight resolution can find it.
    pub producer: String,
    pub signal_type: SignalType,
    pub category: IndicatorCategory,
    /// Magnitude of the technical setup, clamped to [0, 100].
    pub strength: f64,
    /// The producer's self-assessed reliability, clamped to [0, 100].
    pub confidence: f64,
    /// Indicator identifiers behind this signal (e.g. "RSI_14"). Never empty.
    pub indicator_tags: Vec<String>,
    pub reasoning: String,
    pub risk_reward: f64,
    /// Time of the underlying bar.
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub metadata: HashMap<String, Value>,
}

impl TradingSignal {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: impl Into<String>,
        producer: impl Into<String>,
        signal_type: SignalType,
        category: IndicatorCategory,
        strength: f64,
        confidence: f64,
        indicator_tags: Vec<String>,
        reasoning: impl Into<String>,
        risk_reward: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            producer: producer.into(),
            signal_type,
            category,
            strength: strength.clamp(0.0, 100.0),
            confidence: confidence.clamp(0.0, 100.0),
            indicator_tags,
            reasoning: reasoning.into(),
            risk_reward,
            timestamp,
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// The engine's single fused output combining all producer opinions.
///
/// Created fresh on every harmonization call and immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmonizedSignal {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub overall_signal: SignalType,
    pub strength: f64,
    pub confidence: f64,
    /// The contributing per-producer signals, as received.
    pub indicators: Vec<TradingSignal>,
    /// The normalized per-producer weight map actually used.
    pub weights: HashMap<String, f64>,
    /// Human-readable conflict descriptions, empty if none.
    pub conflicts: Vec<String>,
    pub reasoning: String,
}

/// Outcome of a harmonized-signal quality check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}
