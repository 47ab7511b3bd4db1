//! Signal harmonization engine for multi-strategy trading agents.
//!
//! Independent technical-analysis strategies each inspect the same price
//! history and propose a directional opinion. This crate fuses those
//! opinions into one actionable [`HarmonizedSignal`]: it resolves
//! per-producer weights, aggregates composite scores per direction,
//! detects and explains disagreement, and calibrates a single confidence
//! score an execution layer can act on.
//!
//! The strategies themselves live behind the [`SignalProducer`] trait;
//! this crate computes no indicators, fetches no market data, and places
//! no orders.

pub mod config;
pub mod error;
pub mod harmonizer;
pub mod logging;
pub mod models;
pub mod producers;

pub use config::StrategyConfig;
pub use error::{ProducerError, Result};
pub use harmonizer::SignalHarmonizer;
pub use models::market::Candle;
pub use models::signal::{
    HarmonizedSignal, IndicatorCategory, SignalType, TradingSignal, ValidationReport,
};
pub use producers::SignalProducer;
