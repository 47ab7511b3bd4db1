//! Per-producer weight resolution and normalization.

use crate::config::{default_strategy_configs, StrategyConfig};
use std::collections::HashMap;

/// Merge caller overrides into the documented defaults.
///
/// Producers not mentioned in `overrides` keep their default configuration.
pub fn effective_configs(
    overrides: Option<&HashMap<String, StrategyConfig>>,
) -> HashMap<String, StrategyConfig> {
    let mut configs = default_strategy_configs();
    if let Some(overrides) = overrides {
        for (name, config) in overrides {
            configs.insert(name.clone(), config.clone());
        }
    }
    configs
}

/// Normalize weights so the enabled producers sum to 1.0.
///
/// The returned map covers exactly the enabled producers. Disabled producers
/// contribute nothing and are absent. If every enabled weight is zero the
/// map stays all-zero rather than dividing by zero; the aggregator then
/// scores every direction 0 and the decision rule resolves to hold.
pub fn resolve_weights(configs: &HashMap<String, StrategyConfig>) -> HashMap<String, f64> {
    let enabled: Vec<&StrategyConfig> = configs.values().filter(|c| c.enabled).collect();
    let total: f64 = enabled.iter().map(|c| c.weight.max(0.0)).sum();

    enabled
        .into_iter()
        .map(|c| {
            let weight = if total > 0.0 {
                c.weight.max(0.0) / total
            } else {
                0.0
            };
            (c.name.clone(), weight)
        })
        .collect()
}
