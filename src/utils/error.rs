use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorsError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, CorsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CorsError::ConfigError {
            message: "DOMAIN_NAME is not valid unicode".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration error: DOMAIN_NAME is not valid unicode"
        );
    }

    #[test]
    fn test_serialization_error_from_serde_json() {
        let source = serde_json::from_str::<String>("not json").unwrap_err();
        let err: CorsError = source.into();
        assert!(matches!(err, CorsError::SerializationError(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
