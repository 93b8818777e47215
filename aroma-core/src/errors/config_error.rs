//! Configuration errors.

/// Errors raised while building or validating an analysis profile.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid profile TOML: {message}")]
    ParseError { message: String },

    #[error("Profile validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
