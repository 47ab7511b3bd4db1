//! Human-readable explanation of a harmonized decision.

use crate::models::signal::{SignalType, TradingSignal};
use std::cmp::Ordering;

/// Deterministic explanation text: indicator count, agreement ratio, the
/// strongest agreeing signals, and any conflict descriptions verbatim.
pub fn explain(signals: &[TradingSignal], overall_signal: SignalType, conflicts: &[String]) -> String {
    let total = signals.len();
    let mut agreeing: Vec<&TradingSignal> = signals
        .iter()
        .filter(|s| s.signal_type == overall_signal)
        .collect();
    agreeing.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(Ordering::Equal)
    });

    let mut text = format!(
        "{} indicators analyzed, {}/{} agree on {}.",
        total,
        agreeing.len(),
        total,
        overall_signal
    );

    let leaders: Vec<String> = agreeing
        .iter()
        .take(2)
        .map(|s| format!("{} (strength {:.1})", s.indicator_tags.join("/"), s.strength))
        .collect();
    if !leaders.is_empty() {
        text.push_str(&format!(" Strongest support: {}.", leaders.join(", ")));
    }

    if !conflicts.is_empty() {
        text.push_str(&format!(
            " {} conflict(s) detected: {}.",
            conflicts.len(),
            conflicts.join("; ")
        ));
    }

    text
}
