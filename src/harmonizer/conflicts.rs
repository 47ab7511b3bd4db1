//! Disagreement detection between producer signals.
//!
//! Conflicts are informational. The direction is already decided by the
//! aggregator; descriptions produced here feed confidence calibration,
//! reasoning text, and the validator.

use crate::models::signal::{IndicatorCategory, SignalType, TradingSignal};

/// Both sides of an opposing buy/sell pair must exceed this strength for
/// the opposition to be flagged as strong. Tunable policy constant; signals
/// at or below the floor rely on the hold margin alone.
pub const STRONG_OPPOSITION_FLOOR: f64 = 70.0;

/// Detect disagreement patterns across the ensemble.
///
/// Rules run in order and each appends at most one description. A single
/// signal can never conflict with itself.
pub fn detect_conflicts(signals: &[TradingSignal]) -> Vec<String> {
    let mut conflicts = Vec::new();
    if signals.len() < 2 {
        return conflicts;
    }

    if let Some(description) = strong_opposition(signals) {
        conflicts.push(description);
    }
    if let Some(description) = momentum_trend_mismatch(signals) {
        conflicts.push(description);
    }

    conflicts
}

/// At least one strong buy and one strong sell at the same time.
fn strong_opposition(signals: &[TradingSignal]) -> Option<String> {
    let tags_for = |direction: SignalType| -> Vec<&str> {
        signals
            .iter()
            .filter(|s| s.signal_type == direction && s.strength > STRONG_OPPOSITION_FLOOR)
            .flat_map(|s| s.indicator_tags.iter().map(String::as_str))
            .collect()
    };

    let buy_tags = tags_for(SignalType::Buy);
    let sell_tags = tags_for(SignalType::Sell);

    if buy_tags.is_empty() || sell_tags.is_empty() {
        return None;
    }

    Some(format!(
        "Strong opposition between buy indicators [{}] and sell indicators [{}]",
        buy_tags.join(", "),
        sell_tags.join(", ")
    ))
}

/// Momentum and trend indicators each unanimous, but pointing different ways.
fn momentum_trend_mismatch(signals: &[TradingSignal]) -> Option<String> {
    let momentum = unanimous_direction(signals, IndicatorCategory::Momentum)?;
    let trend = unanimous_direction(signals, IndicatorCategory::Trend)?;

    if momentum == trend {
        return None;
    }

    Some(format!(
        "Momentum vs Trend conflict: momentum indicators signal {momentum}, trend indicators signal {trend}"
    ))
}

/// The single direction a category resolves to, if it has signals and they
/// all agree.
fn unanimous_direction(
    signals: &[TradingSignal],
    category: IndicatorCategory,
) -> Option<SignalType> {
    let mut direction = None;
    for signal in signals.iter().filter(|s| s.category == category) {
        match direction {
            None => direction = Some(signal.signal_type),
            Some(seen) if seen != signal.signal_type => return None,
            Some(_) => {}
        }
    }
    direction
}
