//! Unit tests for conflict detection

use crate::common::make_signal;
use harmonix::harmonizer::conflicts::detect_conflicts;
use harmonix::{IndicatorCategory, SignalType};

#[test]
fn test_single_signal_never_conflicts() {
    let signals = vec![make_signal(
        "rsi",
        SignalType::Buy,
        IndicatorCategory::Momentum,
        95.0,
        90.0,
        "RSI_14",
    )];
    assert!(detect_conflicts(&signals).is_empty());
}

#[test]
fn test_strong_opposition_names_both_sides() {
    let signals = vec![
        make_signal("rsi", SignalType::Buy, IndicatorCategory::Momentum, 85.0, 80.0, "RSI_14"),
        make_signal("macd", SignalType::Sell, IndicatorCategory::Momentum, 90.0, 85.0, "MACD_12_26"),
    ];
    let conflicts = detect_conflicts(&signals);
    assert_eq!(conflicts.len(), 1);
    assert!(conflicts[0].contains("RSI_14"));
    assert!(conflicts[0].contains("MACD_12_26"));
}

#[test]
fn test_opposition_at_floor_not_flagged_as_strong() {
    // Exactly 70 on both sides: the floor is strict, so rule 1 stays quiet.
    // Both signals are momentum, so rule 2 cannot fire either.
    let signals = vec![
        make_signal("rsi", SignalType::Buy, IndicatorCategory::Momentum, 70.0, 90.0, "RSI_14"),
        make_signal("macd", SignalType::Sell, IndicatorCategory::Momentum, 70.0, 90.0, "MACD_12_26"),
    ];
    assert!(detect_conflicts(&signals).is_empty());
}

#[test]
fn test_momentum_vs_trend_mismatch() {
    let signals = vec![
        make_signal("rsi", SignalType::Buy, IndicatorCategory::Momentum, 60.0, 55.0, "RSI_14"),
        make_signal("ma_crossover", SignalType::Sell, IndicatorCategory::Trend, 65.0, 60.0, "MA_CROSS_50_200"),
    ];
    let conflicts = detect_conflicts(&signals);
    assert_eq!(conflicts.len(), 1);
    assert!(conflicts[0].contains("Momentum vs Trend"));
    assert!(conflicts[0].contains("BUY"));
    assert!(conflicts[0].contains("SELL"));
}

#[test]
fn test_divided_category_blocks_momentum_trend_rule() {
    // Momentum is split between buy and sell, so it resolves to no single
    // direction and the mismatch rule cannot fire.
    let signals = vec![
        make_signal("rsi", SignalType::Buy, IndicatorCategory::Momentum, 60.0, 55.0, "RSI_14"),
        make_signal("macd", SignalType::Sell, IndicatorCategory::Momentum, 60.0, 55.0, "MACD_12_26"),
        make_signal("ma_crossover", SignalType::Sell, IndicatorCategory::Trend, 65.0, 60.0, "MA_CROSS_50_200"),
    ];
    assert!(detect_conflicts(&signals).is_empty());
}

#[test]
fn test_structure_signals_ignored_by_momentum_trend_rule() {
    let signals = vec![
        make_signal("fibonacci", SignalType::Buy, IndicatorCategory::Structure, 60.0, 55.0, "FIB_618"),
        make_signal("breakout", SignalType::Sell, IndicatorCategory::Structure, 65.0, 60.0, "BREAKOUT_20"),
    ];
    assert!(detect_conflicts(&signals).is_empty());
}

#[test]
fn test_both_rules_can_fire_in_order() {
    let signals = vec![
        make_signal("rsi", SignalType::Buy, IndicatorCategory::Momentum, 85.0, 80.0, "RSI_14"),
        make_signal("ma_crossover", SignalType::Sell, IndicatorCategory::Trend, 90.0, 85.0, "MA_CROSS_50_200"),
    ];
    let conflicts = detect_conflicts(&signals);
    assert_eq!(conflicts.len(), 2);
    assert!(conflicts[0].contains("Strong opposition"));
    assert!(conflicts[1].contains("Momentum vs Trend"));
}
