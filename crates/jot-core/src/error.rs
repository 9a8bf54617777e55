//! Error types for jot.

use thiserror::Error;

/// Result type alias using jot's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for jot operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found, or not owned by the requester
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input (missing/blank required field)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not permitted in the entity's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Uniqueness conflict (duplicate tag name)
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl Error {
    /// Fold a unique-constraint violation into a Conflict with the given
    /// message; leave every other error untouched.
    pub fn conflict_on_unique(self, msg: &str) -> Self {
        match &self {
            Error::Database(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Error::Conflict(msg.to_string())
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("note 42".to_string());
        assert_eq!(err.to_string(), "Not found: note 42");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("text is required".to_string());
        assert_eq!(err.to_string(), "Invalid input: text is required");
    }

    #[test]
    fn test_error_display_invalid_state() {
        let err = Error::InvalidState("note is not archived".to_string());
        assert_eq!(err.to_string(), "Invalid state: note is not archived");
    }

    #[test]
    fn test_error_display_conflict() {
        let err = Error::Conflict("tag 'b' already exists".to_string());
        assert_eq!(err.to_string(), "Conflict: tag 'b' already exists");
    }

    #[test]
    fn test_conflict_on_unique_leaves_other_errors() {
        let err = Error::NotFound("tag 'a'".to_string()).conflict_on_unique("dup");
        match err {
            Error::NotFound(msg) => assert_eq!(msg, "tag 'a'"),
            _ => panic!("Expected NotFound to pass through"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i64> {
            Ok(42)
        }
        assert_eq!(get_result().unwrap(), 42);
    }
}
