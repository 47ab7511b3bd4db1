//! The producer contract: how external strategies hand opinions to the engine.

use crate::error::Result;
use crate::models::market::Candle;
use crate::models::signal::{IndicatorCategory, TradingSignal};
use async_trait::async_trait;

/// An external technical-analysis strategy.
///
/// Given ordered price history, a producer yields at most one opinion.
/// `Ok(None)` means "no opinion" (e.g. not enough bars) and is a normal
/// outcome, distinct from `Err`, which the engine treats as a producer
/// failure and isolates from the ensemble.
#[async_trait]
pub trait SignalProducer: Send + Sync {
    /// Stable name used for config lookup and weight resolution.
    fn name(&self) -> &str;

    /// Analytical family stamped onto every signal this producer emits.
    fn category(&self) -> IndicatorCategory;

    /// Inspect the price history (oldest to newest) and propose an opinion.
    async fn generate_signal(&self, candles: &[Candle]) -> Result<Option<TradingSignal>>;
}
