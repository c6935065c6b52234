//! Error types for hashing operations.
//!
//! The hash engine itself is total: every `(seed, data)` pair has a defined
//! output. Errors exist only for rejected call preconditions on the raw
//! entry points.

use core::fmt;

/// A call precondition was violated.
///
/// Returned when a raw entry point is handed arguments that cannot describe a
/// byte sequence (a null data pointer with a nonzero claimed length). The
/// call is rejected before any memory is touched; there is no partial
/// failure and nothing to retry.
///
/// # Examples
///
/// ```
/// use traits::InvalidArgumentError;
///
/// fn describe(data: *const u8, len: usize) -> Result<usize, InvalidArgumentError> {
///   if data.is_null() && len != 0 {
///     return Err(InvalidArgumentError::new());
///   }
///   Ok(len)
/// }
///
/// assert!(describe(core::ptr::null(), 4).is_err());
/// assert_eq!(describe(core::ptr::null(), 0), Ok(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct InvalidArgumentError;

impl InvalidArgumentError {
  /// Create a new invalid-argument error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for InvalidArgumentError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for InvalidArgumentError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("invalid argument")
  }
}

impl core::error::Error for InvalidArgumentError {}
