//! Central error types for Folio.
//!
//! The cursor follower itself never fails. Errors come from configuration
//! validation and from the browser binding layer, and all of them implement
//! `Serialize` so they can be handed back to JavaScript as plain strings.

use serde::Serialize;
use thiserror::Error;

/// Main error type for Folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration value out of range or malformed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A call into the host environment (DOM, window) failed
    #[error("Host error: {0}")]
    HostError(String),

    /// Browser key-value storage unavailable or rejected a write
    #[error("Storage error: {0}")]
    StorageError(String),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A page URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Serialize for FolioError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Extension trait that tags a failed host lookup or call with what was
/// being attempted.
///
/// `Option`s fail with "<what> unavailable"; `Result`s keep the underlying
/// error's debug form, since JS exceptions carry no `Display`.
///
/// # Example
/// ```ignore
/// use folio_lib::error::{ErrorContext, FolioResult};
///
/// fn document() -> FolioResult<web_sys::Document> {
///     web_sys::window().host_context("window")?.document().host_context("document")
/// }
/// ```
pub trait ErrorContext<T> {
    /// Fail with `FolioError::HostError`.
    fn host_context(self, what: &str) -> FolioResult<T>;

    /// Fail with `FolioError::StorageError`.
    fn storage_context(self, what: &str) -> FolioResult<T>;
}

impl<T> ErrorContext<T> for Option<T> {
    fn host_context(self, what: &str) -> FolioResult<T> {
        self.ok_or_else(|| FolioError::HostError(format!("{} unavailable", what)))
    }

    fn storage_context(self, what: &str) -> FolioResult<T> {
        self.ok_or_else(|| FolioError::StorageError(format!("{} unavailable", what)))
    }
}

impl<T, E: std::fmt::Debug> ErrorContext<T> for Result<T, E> {
    fn host_context(self, what: &str) -> FolioResult<T> {
        self.map_err(|e| FolioError::HostError(format!("{} failed: {:?}", what, e)))
    }

    fn storage_context(self, what: &str) -> FolioResult<T> {
        self.map_err(|e| FolioError::StorageError(format!("{} failed: {:?}", what, e)))
    }
}

/// Type alias for Results using FolioError.
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::InvalidConfig("smoothingFactor must be in (0, 1]".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid config: smoothingFactor must be in (0, 1]"
        );
    }

    #[test]
    fn test_error_serialization() {
        let err = FolioError::StorageError("localStorage unavailable".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Storage error: localStorage unavailable\"");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::JsonError(_)));
    }

    #[test]
    fn test_from_url_error() {
        let url_err = url::Url::parse("/relative").unwrap_err();
        let err: FolioError = url_err.into();
        assert!(matches!(err, FolioError::InvalidUrl(_)));
        assert!(err.to_string().starts_with("Invalid URL: "));
    }

    #[test]
    fn test_missing_host_object() {
        let window: Option<()> = None;
        let err = window.host_context("window").unwrap_err();
        assert!(matches!(err, FolioError::HostError(_)));
        assert_eq!(err.to_string(), "Host error: window unavailable");
    }

    #[test]
    fn test_failed_host_call_keeps_cause() {
        let result: Result<(), &str> = Err("SecurityError");
        let msg = result
            .host_context("requestAnimationFrame")
            .unwrap_err()
            .to_string();
        assert_eq!(msg, "Host error: requestAnimationFrame failed: \"SecurityError\"");
    }

    #[test]
    fn test_storage_context() {
        let storage: Option<()> = None;
        assert!(matches!(
            storage.storage_context("localStorage"),
            Err(FolioError::StorageError(_))
        ));

        let write: Result<(), &str> = Err("QuotaExceededError");
        let msg = write.storage_context("setItem").unwrap_err().to_string();
        assert!(msg.starts_with("Storage error: setItem failed"));
        assert!(msg.contains("QuotaExceededError"));
    }

    #[test]
    fn test_context_ok_passthrough() {
        let result: Result<i32, &str> = Ok(42);
        assert_eq!(result.host_context("should not appear").unwrap(), 42);
        assert_eq!(Some(7).storage_context("should not appear").unwrap(), 7);
    }
}
