//! Shared data models spanning the engine layers.

pub mod market;
pub mod signal;

pub use market::Candle;
pub use signal::{
    HarmonizedSignal, IndicatorCategory, SignalType, TradingSignal, ValidationReport,
};
