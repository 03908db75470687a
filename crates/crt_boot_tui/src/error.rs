use thiserror::Error;

/// Rejected command-line configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("speed must be a finite number in (0, {max}], got {value}")]
    InvalidSpeed { value: f64, max: f64 },

    #[error("ready delay must be at least 1 ms")]
    ZeroReadyDelay,
}
