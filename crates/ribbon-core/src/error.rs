use thiserror::Error;

/// Rejected sketch parameters. Raised once at setup, never from the frame loop.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("chain needs at least 2 links, got {0}")]
    TooFewLinks(usize),
    #[error("ribbon needs at least 2 rows, got {0}")]
    TooFewRows(usize),
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("heading damping must be in [0, 1), got {0}")]
    DampingOutOfRange(f64),
    #[error("texture size must be non-empty, got {width}x{height}")]
    EmptyTexture { width: f64, height: f64 },
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
