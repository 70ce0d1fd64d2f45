use std::io;

/// Failures the safe API reports and the foreign entry points swallow.
#[derive(Debug, thiserror::Error)]
pub enum ShimError {
    /// `print_string` reads the first byte of its input, so there has to be one.
    #[error("cannot print the first character of an empty string")]
    EmptyString,
    #[error("failed to write to the output sink: {0}")]
    Io(#[from] io::Error),
}

pub type ShimResult<T = ()> = Result<T, ShimError>;
