use thiserror::Error;

/// Rejected tuning or field parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{name}` must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("`{name}` must be a non-negative finite number, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("narrowing factor must be in (0, 1], got {0}")]
    NarrowingOutOfRange(f64),

    #[error("field must have a positive finite size, got {width}x{height}")]
    InvalidField { width: f64, height: f64 },
}
