use thiserror::Error;

/// Errors surfaced by the map generation operations.
///
/// All of them are caller errors: nothing is retried and nothing is clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("invalid grid dimensions {width}x{height}, both sides must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: String },

    /// Every cell of the field holds the same value, so it cannot be normalized.
    #[error("degenerate field: every cell equals {value}")]
    DegenerateField { value: f64 },
}

impl GenerationError {
    pub(crate) fn invalid_parameter(name: &'static str, value: impl ToString) -> Self {
        Self::InvalidParameter { name, value: value.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
