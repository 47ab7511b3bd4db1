//! Quality checks for an already-harmonized signal.

use crate::models::signal::{HarmonizedSignal, SignalType, ValidationReport};
use std::collections::HashSet;

pub const MIN_CONFIDENCE: f64 = 60.0;
pub const MIN_ACTIONABLE_STRENGTH: f64 = 50.0;
pub const MIN_INDICATOR_DIVERSITY: usize = 3;

/// Run every check independently; each failing check appends one issue and
/// one matching recommendation. The signal is valid when no issue fires.
pub fn validate(signal: &HarmonizedSignal) -> ValidationReport {
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    if signal.confidence < MIN_CONFIDENCE {
        issues.push(format!(
            "Low confidence signal ({:.1} below {:.0})",
            signal.confidence, MIN_CONFIDENCE
        ));
        recommendations
            .push("Wait for additional indicator agreement before acting".to_string());
    }

    if !signal.conflicts.is_empty() {
        issues.push(format!(
            "{} indicator conflicts detected",
            signal.conflicts.len()
        ));
        recommendations
            .push("Review the conflicting indicators and consider a smaller position".to_string());
    }

    // Weak hold is expected, not a defect; only actionable directions
    // need conviction.
    if signal.strength < MIN_ACTIONABLE_STRENGTH && signal.overall_signal != SignalType::Hold {
        issues.push(format!(
            "Weak signal strength ({:.1}) for a {} decision",
            signal.strength, signal.overall_signal
        ));
        recommendations.push("Treat as informational until the setup strengthens".to_string());
    }

    let distinct_tags: HashSet<&str> = signal
        .indicators
        .iter()
        .flat_map(|s| s.indicator_tags.iter().map(String::as_str))
        .collect();
    if distinct_tags.len() < MIN_INDICATOR_DIVERSITY {
        issues.push("Limited indicator diversity".to_string());
        recommendations.push("Enable more producers to broaden indicator coverage".to_string());
    }

    ValidationReport {
        is_valid: issues.is_empty(),
        issues,
        recommendations,
    }
}
