//! Error types for the game core.

use thiserror::Error;

/// Errors that can occur while configuring a round.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pair count {requested} is outside the supported range 1..={max}")]
    PairCountOutOfRange { requested: usize, max: usize },
}
