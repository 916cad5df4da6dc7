use thiserror::Error;

/// Construction-time failures.
///
/// Nothing after construction is fallible: stepping is total and in-range
/// cell access is the caller's contract (violations panic).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error(
        "buffer size mismatch: current is {current_width}x{current_height}, \
         next is {next_width}x{next_height}"
    )]
    SizeMismatch {
        current_width: usize,
        current_height: usize,
        next_width: usize,
        next_height: usize,
    },
}
