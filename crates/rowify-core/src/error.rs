//! Error types for rowify operations.

use thiserror::Error;

/// Error type for render configuration contract violations.
///
/// Heterogeneous record shapes and empty inputs are not errors: missing keys
/// render blank and an empty input renders as the empty string. Errors are
/// reserved for configurations that would silently produce misaligned output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The delimiter list was empty. At least one delimiter is required;
    /// it is reused for every nesting depth past the end of the list.
    #[error("delimiter list must not be empty")]
    EmptyDelimiters,
}

/// Result type alias using the rowify [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
