//! Signal harmonization pipeline.
//!
//! One synchronous pass per invocation: collect opinions, resolve weights,
//! aggregate per-direction scores, pick a winner, describe conflicts,
//! calibrate confidence, and explain the result.

pub mod aggregation;
pub mod confidence;
pub mod conflicts;
pub mod engine;
pub mod reasoning;
pub mod validator;
pub mod weights;

pub use aggregation::{DirectionScores, MIN_ACTION_MARGIN};
pub use conflicts::STRONG_OPPOSITION_FLOOR;
pub use engine::SignalHarmonizer;
