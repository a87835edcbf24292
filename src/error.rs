//! Error types for dermaguide operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for dermaguide operations.
///
/// Provides detailed context about failures including missing survey
/// columns, dimension mismatches, and out-of-range user ids.
///
/// # Examples
///
/// ```
/// use dermaguide::error::DermaguideError;
///
/// let err = DermaguideError::MissingColumn {
///     column: "Age Group".to_string(),
/// };
/// assert!(err.to_string().contains("Age Group"));
/// ```
#[derive(Debug)]
pub enum DermaguideError {
    /// A designated survey column is absent from the table.
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Queried user id is outside the table's row range.
    ///
    /// The `Display` text is suitable for showing to the caller directly.
    InvalidUser {
        /// The offending user id
        user_id: usize,
        /// Number of users in the table
        n_users: usize,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Snapshot serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for DermaguideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DermaguideError::MissingColumn { column } => {
                write!(f, "Required column missing from survey table: {column}")
            }
            DermaguideError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            DermaguideError::InvalidUser { user_id, n_users } => {
                write!(
                    f,
                    "Invalid user id {user_id}: table has {n_users} users (valid ids are 0..{n_users})"
                )
            }
            DermaguideError::Io(e) => write!(f, "I/O error: {e}"),
            DermaguideError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            DermaguideError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DermaguideError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DermaguideError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DermaguideError {
    fn from(err: std::io::Error) -> Self {
        DermaguideError::Io(err)
    }
}

impl From<&str> for DermaguideError {
    fn from(msg: &str) -> Self {
        DermaguideError::Other(msg.to_string())
    }
}

impl From<String> for DermaguideError {
    fn from(msg: String) -> Self {
        DermaguideError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, DermaguideError>;
