use thiserror::Error;

/// Errors surfaced by the binary. The rendering core itself cannot fail.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or stdout I/O failure
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected command-line configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Logging could not be set up
    #[error("logging setup failed: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_their_category() {
        let err = AppError::Config("width must be non-zero".to_string());
        assert_eq!(err.to_string(), "invalid configuration: width must be non-zero");

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: AppError = io.into();
        assert_eq!(err.to_string(), "terminal I/O error: closed");
    }
}
