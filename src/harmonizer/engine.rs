//! The harmonization engine: concurrent producer fan-out plus the fusion
//! pipeline.

use crate::config::StrategyConfig;
use crate::harmonizer::{aggregation, confidence, conflicts, reasoning, validator, weights};
use crate::models::market::Candle;
use crate::models::signal::{HarmonizedSignal, TradingSignal, ValidationReport};
use crate::producers::SignalProducer;
use chrono::Utc;
use futures_util::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

pub const DEFAULT_PRODUCER_TIMEOUT: Duration = Duration::from_secs(5);

/// Fuses independent producer opinions into one harmonized signal.
///
/// Stateless across calls: every invocation is a pure function of the
/// market history, the producer outputs, and the configuration. The only
/// long-lived state is the set of producer handles.
pub struct SignalHarmonizer {
    producers: Vec<Arc<dyn SignalProducer>>,
    producer_timeout: Duration,
}

impl SignalHarmonizer {
    pub fn new(producers: Vec<Arc<dyn SignalProducer>>) -> Self {
        Self {
            producers,
            producer_timeout: DEFAULT_PRODUCER_TIMEOUT,
        }
    }

    pub fn with_producer_timeout(mut self, producer_timeout: Duration) -> Self {
        self.producer_timeout = producer_timeout;
        self
    }

    /// Collect one opinion per enabled producer and fuse them.
    ///
    /// Producers run concurrently, each bounded by the producer timeout. A
    /// producer that fails, panics, or times out is dropped from the
    /// ensemble with a log line; one bad strategy never aborts the call.
    /// Returns `None` when no producer yields a usable signal, which
    /// callers must treat as a normal "no opinion" outcome.
    pub async fn harmonize(
        &self,
        candles: &[Candle],
        overrides: Option<&HashMap<String, StrategyConfig>>,
    ) -> Option<HarmonizedSignal> {
        let mut configs = weights::effective_configs(overrides);
        for producer in &self.producers {
            configs
                .entry(producer.name().to_string())
                .or_insert_with(|| StrategyConfig::new(producer.name()));
        }
        let resolved_weights = weights::resolve_weights(&configs);

        let signals = self.collect_signals(candles, &configs).await;
        if signals.is_empty() {
            debug!("no usable signals in ensemble, declining to harmonize");
            return None;
        }

        let scores = aggregation::aggregate(&signals, &resolved_weights);
        let (overall_signal, strength) = aggregation::decide(&scores);
        let conflicts = conflicts::detect_conflicts(&signals);
        let confidence = confidence::calibrate(&signals, overall_signal, strength);
        let reasoning = reasoning::explain(&signals, overall_signal, &conflicts);

        let symbol = signals[0].symbol.clone();
        debug!(
            symbol = %symbol,
            signal = %overall_signal,
            strength,
            confidence,
            conflicts = conflicts.len(),
            "harmonized ensemble"
        );

        Some(HarmonizedSignal {
            symbol,
            timestamp: Utc::now(),
            overall_signal,
            strength,
            confidence,
            indicators: signals,
            weights: resolved_weights,
            conflicts,
            reasoning,
        })
    }

    /// Quality-check a harmonized signal. Pure function, separate from
    /// [`harmonize`](Self::harmonize).
    pub fn validate(signal: &HarmonizedSignal) -> ValidationReport {
        validator::validate(signal)
    }

    /// Fan out to every enabled producer, fan the surviving opinions back in.
    async fn collect_signals(
        &self,
        candles: &[Candle],
        configs: &HashMap<String, StrategyConfig>,
    ) -> Vec<TradingSignal> {
        let history: Arc<[Candle]> = candles.to_vec().into();
        let mut tasks = Vec::new();

        for producer in &self.producers {
            let enabled = configs
                .get(producer.name())
                .map(|c| c.enabled)
                .unwrap_or(true);
            if !enabled {
                debug!(producer = producer.name(), "producer disabled, skipping");
                continue;
            }

            let producer = Arc::clone(producer);
            let history = Arc::clone(&history);
            let producer_timeout = self.producer_timeout;
            tasks.push(tokio::spawn(async move {
                let name = producer.name().to_string();
                match timeout(producer_timeout, producer.generate_signal(&history)).await {
                    Ok(Ok(signal)) => signal,
                    Ok(Err(err)) => {
                        warn!(producer = %name, error = %err, "producer failed, dropping its opinion");
                        None
                    }
                    Err(_) => {
                        warn!(producer = %name, "producer timed out, dropping its opinion");
                        None
                    }
                }
            }));
        }

        let mut signals = Vec::new();
        for joined in join_all(tasks).await {
            match joined {
                Ok(Some(signal)) => signals.push(signal),
                Ok(None) => {}
                Err(err) => warn!(error = %err, "producer task aborted, dropping its opinion"),
            }
        }
        signals
    }
}
