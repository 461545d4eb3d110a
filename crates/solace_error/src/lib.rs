//! Error types for the Solace admission library.
//!
//! This crate provides the foundation error types used throughout the Solace
//! workspace. Expected admission outcomes (quota exhausted, capability
//! denied) are decision values, not errors; only configuration and storage
//! faults surface here.

/// Configuration error with source location.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}

/// Storage error with source location.
#[derive(Debug, Clone)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Store Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for StoreError {}

/// Error kinds for Solace operations.
#[derive(Debug, Clone, derive_more::Display)]
pub enum SolaceErrorKind {
    /// Configuration file error.
    #[display("{}", _0)]
    Config(ConfigError),
    /// Guest or subscription store error.
    #[display("{}", _0)]
    Store(StoreError),
    /// Tier name outside the closed tier set.
    #[display("Invalid tier: {}", _0)]
    InvalidTier(String),
}

impl From<ConfigError> for SolaceErrorKind {
    fn from(err: ConfigError) -> Self {
        SolaceErrorKind::Config(err)
    }
}

impl From<StoreError> for SolaceErrorKind {
    fn from(err: StoreError) -> Self {
        SolaceErrorKind::Store(err)
    }
}

/// Solace error with kind discrimination.
#[derive(Debug, Clone)]
pub struct SolaceError(Box<SolaceErrorKind>);

impl SolaceError {
    /// Create a new error from a kind.
    pub fn new(kind: SolaceErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SolaceErrorKind {
        &self.0
    }
}

impl std::fmt::Display for SolaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Solace Error: {}", self.0)
    }
}

impl std::error::Error for SolaceError {}

// Generic From implementation for any type that converts to SolaceErrorKind
impl<T> From<T> for SolaceError
where
    T: Into<SolaceErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Solace operations.
pub type SolaceResult<T> = std::result::Result<T, SolaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_records_location() {
        let err = ConfigError::new("missing table");
        assert_eq!(err.message, "missing table");
        assert!(err.file.ends_with("lib.rs"));
    }

    #[test]
    fn kind_conversion_wraps_config_error() {
        let err: SolaceError = ConfigError::new("bad value").into();
        assert!(matches!(err.kind(), SolaceErrorKind::Config(_)));
    }

    #[test]
    fn invalid_tier_displays_name() {
        let err = SolaceError::new(SolaceErrorKind::InvalidTier("platinum".into()));
        assert!(err.to_string().contains("Invalid tier: platinum"));
    }
}
