//! Blank and empty checks used by guard clauses.

/// Input checks used by the helper's guard clauses.
///
/// `None` stands for an absent input in both checks.
pub trait ObjectOperations: Send + Sync {
    /// `true` if the value is absent, empty, or only whitespace.
    fn is_null_or_whitespace(&self, value: Option<&str>) -> bool;

    /// `true` if the string is absent or has zero length.
    fn is_null_or_empty_str(&self, value: Option<&str>) -> bool {
        value.is_none_or(str::is_empty)
    }

    /// `true` if the slice is absent or has no elements.
    fn is_null_or_empty_slice(&self, len: Option<usize>) -> bool {
        len.is_none_or(|n| n == 0)
    }
}

/// Standard [`ObjectOperations`] using Unicode whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultObjectOperations;

impl ObjectOperations for DefaultObjectOperations {
    fn is_null_or_whitespace(&self, value: Option<&str>) -> bool {
        value.is_none_or(|v| v.trim().is_empty())
    }
}

/// Length of an optional slice, for [`ObjectOperations::is_null_or_empty_slice`].
pub fn slice_len<T>(value: Option<&[T]>) -> Option<usize> {
    value.map(<[T]>::len)
}
