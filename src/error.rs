use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Structural input errors detected before any geometry is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unsupported polygon arity {arity}: expected 3..=8")]
    UnsupportedArity { arity: u8 },

    #[error("ring count must be >= 1")]
    ZeroRingCount,

    #[error("attribute count mismatch: arity={expected}, attributes={actual}")]
    AttributeCountMismatch { expected: usize, actual: usize },

    #[error("attribute `{label}` has a non-finite value")]
    NonFiniteValue { label: String },

    #[error("`{field}` must be finite and >= 0, got {value}")]
    InvalidSize { field: &'static str, value: f64 },

    #[error("invalid drawing region: width={width}, height={height}")]
    InvalidRegion { width: f64, height: f64 },

    #[error("size budget leaves no room for the polygon (side={side})")]
    DegenerateRadius { side: f64 },

    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
