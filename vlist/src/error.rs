use thiserror::Error;

/// Configuration errors raised while building a list or replacing its data.
///
/// These are caller mistakes: nothing retries them, the configuration has to be fixed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// `fixed_size = true` needs `ItemSize::Fixed`, `fixed_size = false` needs `ItemSize::PerIndex`.
    #[error("itemSize/fixedSize mismatch (fixed_size = {fixed_size})")]
    SizeModelMismatch { fixed_size: bool },

    #[error("fixed item size must be a positive, finite number (got {0})")]
    NonPositiveExtent(f64),

    #[error("invalid data: item {index} has extent {extent}, expected a finite non-negative number")]
    InvalidData { index: usize, extent: f64 },

    #[error("missing required option `{0}`")]
    MissingOption(&'static str),
}
