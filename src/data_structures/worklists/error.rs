//! Error types for worklists.

/// Errors that can occur in worklist operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum WorkListError {
    /// No work remains to peek at or take
    #[error("Worklist has no remaining work")]
    NoWork,

    /// An indexed operation addressed a position outside the pending work
    #[error("Index {index} is out of bounds for worklist of size {size}")]
    IndexOutOfBounds {
        /// The requested logical index.
        index: usize,
        /// The number of pending items at the time of the call.
        size: usize,
    },

    /// A fixed-size worklist is full and cannot accept more work
    #[error("Worklist is at capacity ({capacity})")]
    AtCapacity {
        /// The fixed capacity of the worklist.
        capacity: usize,
    },
}

/// Result type for worklist operations
pub type WorkListResult<T> = Result<T, WorkListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(WorkListError::NoWork.to_string(), "Worklist has no remaining work");

        let err = WorkListError::IndexOutOfBounds { index: 5, size: 2 };
        assert_eq!(err.to_string(), "Index 5 is out of bounds for worklist of size 2");

        let err = WorkListError::AtCapacity { capacity: 8 };
        assert_eq!(err.to_string(), "Worklist is at capacity (8)");
    }
}
