//! Error types for the API Gateway helper.
//!
//! There are exactly two failure classes:
//!
//! - [`HelperError::MissingField`]: a guard clause rejected caller input
//!   before any remote call was made.
//! - [`HelperError::Remote`]: the remote repository failed. The original
//!   error is carried untouched inside a [`RemoteError`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use apigw_kernel::error::HelperError;
//!
//! match helper.delete_usage_plan_key("", "usage-plan-id").await {
//!     Err(HelperError::MissingField { field, .. }) => assert_eq!(field, "keyId"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Result alias used by every helper operation.
pub type HelperResult<T> = Result<T, HelperError>;

/// Boxed error type accepted from remote collaborators.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Helper operation error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HelperError {
    /// A required input was absent, blank or empty.
    ///
    /// `action` is the `"<Helper>.<Operation>"` label and `field` names the
    /// rejected input (or, for usage plan stages, `"at least one apiStage"`).
    #[error("[{action}]-Must supply {field}")]
    MissingField {
        action: &'static str,
        field: &'static str,
    },

    /// The remote repository rejected the call.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl HelperError {
    /// Create a guard clause failure.
    pub fn missing_field(action: &'static str, field: &'static str) -> Self {
        Self::MissingField { action, field }
    }

    /// Returns `true` if this error was raised locally by a guard clause.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Returns the remote error, if the failure came from the repository.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(e) => Some(e),
            _ => None,
        }
    }
}

/// Opaque wrapper around an error raised by the remote repository.
///
/// The wrapped value is never rewritten: `Display` and `source()` forward
/// to it, and [`RemoteError::downcast_ref`] recovers the original type.
pub struct RemoteError {
    inner: BoxError,
}

impl RemoteError {
    /// Wrap a collaborator error.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self { inner: err.into() }
    }

    /// Create a remote error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            inner: message.into().into(),
        }
    }

    /// Borrow the wrapped error.
    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// Attempt to view the wrapped error as a concrete type.
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        self.inner.downcast_ref::<T>()
    }

    /// Unwrap into the boxed original error.
    pub fn into_inner(self) -> BoxError {
        self.inner
    }
}

impl fmt::Debug for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for RemoteError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}
