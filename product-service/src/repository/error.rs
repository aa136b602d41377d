//! Repository error types.

use std::fmt;

/// Operation being performed when the repository error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Listing all products.
    FindAll,
    /// Finding a single product by id.
    FindById,
    /// Inserting a new product.
    Create,
    /// Replacing an existing product's fields.
    Update,
    /// Deleting a product.
    Delete,
    /// Connectivity probe.
    Ping,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindAll => write!(f, "find_all"),
            Self::FindById => write!(f, "find_by_id"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
            Self::Ping => write!(f, "ping"),
        }
    }
}

/// Category of repository error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Failed to reach the database.
    ConnectionFailed,
    /// Operation timed out.
    Timeout,
    /// Database constraint violation.
    ConstraintViolation,
    /// Row decoding failed.
    SerializationError,
    /// Underlying database error.
    DatabaseError,
    /// Other unclassified error.
    Other,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::ConstraintViolation => write!(f, "constraint_violation"),
            Self::SerializationError => write!(f, "serialization_error"),
            Self::DatabaseError => write!(f, "database_error"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured repository error with operation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred.
    pub operation: RepositoryOperation,
    /// The category of error.
    pub kind: RepositoryErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl RepositoryError {
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
        }
    }

    /// Transient errors that may succeed on retry.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout
        )
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )
    }
}

impl std::error::Error for RepositoryError {}
