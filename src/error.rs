use thiserror::Error;

/// Error type for the pollental library
#[derive(Error, Debug)]
pub enum PollentalError {
    /// Transport failure, non-success HTTP status, or a malformed response
    /// body. The pipeline does not distinguish between the three.
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for PollentalError {
    fn from(err: reqwest::Error) -> Self {
        PollentalError::NetworkError(err.to_string())
    }
}

impl From<config::ConfigError> for PollentalError {
    fn from(err: config::ConfigError) -> Self {
        PollentalError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PollentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_message() {
        let err = PollentalError::NetworkError("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
