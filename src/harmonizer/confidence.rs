//! Confidence calibration for the harmonized decision.

use crate::models::signal::{SignalType, TradingSignal};

const CONSENSUS_SHARE: f64 = 40.0;
const AGREEMENT_CONFIDENCE_SHARE: f64 = 0.4;
const STRENGTH_SHARE: f64 = 0.2;

/// Blend breadth of agreement, the agreeing signals' own self-reported
/// reliability, and raw strength into one [0, 100] confidence score.
pub fn calibrate(signals: &[TradingSignal], overall_signal: SignalType, strength: f64) -> f64 {
    if signals.is_empty() {
        return 0.0;
    }

    let agreeing: Vec<&TradingSignal> = signals
        .iter()
        .filter(|s| s.signal_type == overall_signal)
        .collect();

    let consensus_ratio = agreeing.len() as f64 / signals.len() as f64;
    let avg_confidence = if agreeing.is_empty() {
        0.0
    } else {
        agreeing.iter().map(|s| s.confidence).sum::<f64>() / agreeing.len() as f64
    };

    (consensus_ratio * CONSENSUS_SHARE
        + avg_confidence * AGREEMENT_CONFIDENCE_SHARE
        + strength * STRENGTH_SHARE)
        .clamp(0.0, 100.0)
}
