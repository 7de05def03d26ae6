//! Error types for the portfolio site

use thiserror::Error;

/// Main error type for site-level operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Site configuration could not be parsed or failed validation
    #[error("Config error: {0}")]
    Config(String),

    /// A browser object the behavior needs was not available
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::Config("endpoint is empty".to_string());
        assert_eq!(format!("{}", err), "Config error: endpoint is empty");

        let err = PortfolioError::Dom("no window".to_string());
        assert_eq!(err.to_string(), "DOM error: no window");
    }
}
