//! Error taxonomy for signal producers.
//!
//! The harmonizer itself never fails: a producer error is isolated and the
//! ensemble continues with the remaining signals, so nothing here crosses
//! the `harmonize` boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProducerError {
    #[error("malformed market data: {0}")]
    MalformedData(String),
    #[error("indicator computation failed: {0}")]
    ComputationFailed(String),
    #[error("invalid producer parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = std::result::Result<T, ProducerError>;
