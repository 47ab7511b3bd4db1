//! Direction-bucketed score aggregation and the decision rule.

use crate::models::signal::{SignalType, TradingSignal};
use std::collections::HashMap;

/// Minimum buy/sell score margin (on the 0-100 composite scale) required to
/// act. Closely matched opposing opinions default to hold.
pub const MIN_ACTION_MARGIN: f64 = 20.0;

const STRENGTH_SHARE: f64 = 0.7;
const CONFIDENCE_SHARE: f64 = 0.3;

/// The unit used for cross-signal comparison: setup magnitude blended with
/// the producer's self-assessed reliability.
pub fn composite_score(signal: &TradingSignal) -> f64 {
    signal.strength * STRENGTH_SHARE + signal.confidence * CONFIDENCE_SHARE
}

/// Weight-weighted average composite score per direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectionScores {
    pub buy: f64,
    pub sell: f64,
    pub hold: f64,
}

impl DirectionScores {
    pub fn max(&self) -> f64 {
        self.buy.max(self.sell).max(self.hold)
    }
}

/// Partition signals by direction and average their composite scores,
/// weighted by each signal's originating producer's resolved weight.
///
/// A direction with no signals, or whose signals all carry zero weight,
/// scores 0.
pub fn aggregate(signals: &[TradingSignal], weights: &HashMap<String, f64>) -> DirectionScores {
    let mut sums: HashMap<SignalType, (f64, f64)> = HashMap::new();

    for signal in signals {
        let weight = weights.get(&signal.producer).copied().unwrap_or(0.0);
        let entry = sums.entry(signal.signal_type).or_insert((0.0, 0.0));
        entry.0 += composite_score(signal) * weight;
        entry.1 += weight;
    }

    let score_for = |direction: SignalType| -> f64 {
        match sums.get(&direction) {
            Some(&(weighted_sum, total_weight)) if total_weight > 0.0 => {
                weighted_sum / total_weight
            }
            _ => 0.0,
        }
    };

    DirectionScores {
        buy: score_for(SignalType::Buy),
        sell: score_for(SignalType::Sell),
        hold: score_for(SignalType::Hold),
    }
}

/// Pick the overall direction and its strength.
///
/// Buy or sell wins only when strictly greatest among the three scores and
/// separated from the opposing side by at least [`MIN_ACTION_MARGIN`];
/// otherwise the decision is hold with the largest score as strength.
pub fn decide(scores: &DirectionScores) -> (SignalType, f64) {
    let diff = (scores.buy - scores.sell).abs();

    if scores.buy > scores.sell && scores.buy > scores.hold && diff >= MIN_ACTION_MARGIN {
        (SignalType::Buy, scores.buy)
    } else if scores.sell > scores.buy && scores.sell > scores.hold && diff >= MIN_ACTION_MARGIN {
        (SignalType::Sell, scores.sell)
    } else {
        (SignalType::Hold, scores.max())
    }
}
