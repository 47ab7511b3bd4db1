//! Unit tests for confidence calibration

use crate::common::make_signal;
use harmonix::harmonizer::confidence::calibrate;
use harmonix::{IndicatorCategory, SignalType};

#[test]
fn test_unanimous_single_signal() {
    let signals = vec![make_signal(
        "rsi",
        SignalType::Buy,
        IndicatorCategory::Momentum,
        75.0,
        70.0,
        "RSI_14",
    )];
    // 1.0 * 40 + 70 * 0.4 + 73.5 * 0.2
    let confidence = calibrate(&signals, SignalType::Buy, 73.5);
    assert!((confidence - 82.7).abs() < 1e-9);
}

#[test]
fn test_split_ensemble_halves_consensus() {
    let signals = vec![
        make_signal("rsi", SignalType::Buy, IndicatorCategory::Momentum, 75.0, 70.0, "RSI_14"),
        make_signal("macd", SignalType::Sell, IndicatorCategory::Momentum, 75.0, 70.0, "MACD_12_26"),
    ];
    // 0.5 * 40 + 70 * 0.4 + 73.5 * 0.2
    let confidence = calibrate(&signals, SignalType::Buy, 73.5);
    assert!((confidence - 62.7).abs() < 1e-9);
}

#[test]
fn test_no_agreeing_signals() {
    let signals = vec![
        make_signal("rsi", SignalType::Buy, IndicatorCategory::Momentum, 75.0, 70.0, "RSI_14"),
        make_signal("macd", SignalType::Sell, IndicatorCategory::Momentum, 75.0, 70.0, "MACD_12_26"),
    ];
    // 0 * 40 + 0 * 0.4 + 50 * 0.2
    let confidence = calibrate(&signals, SignalType::Hold, 50.0);
    assert!((confidence - 10.0).abs() < 1e-9);
}

#[test]
fn test_empty_ensemble_scores_zero() {
    assert_eq!(calibrate(&[], SignalType::Hold, 0.0), 0.0);
}

#[test]
fn test_result_stays_within_bounds() {
    let signals = vec![make_signal(
        "rsi",
        SignalType::Buy,
        IndicatorCategory::Momentum,
        100.0,
        100.0,
        "RSI_14",
    )];
    let confidence = calibrate(&signals, SignalType::Buy, 100.0);
    assert!(confidence <= 100.0);
    assert!(confidence >= 0.0);
}
