use thiserror::Error;

pub type Result<T> = std::result::Result<T, LevenshteinError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevenshteinError {
    /// The caller handed in something that breaks the documented contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The full cost matrix cannot be addressed or allocated.
    #[error("cost matrix of {rows}x{cols} cells exceeds the addressable limit")]
    Overflow { rows: usize, cols: usize },

    /// An invariant of the engine itself was violated. This is a bug, not a usage error.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl LevenshteinError {
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        log::error!("levenshtein engine invariant violated: {message}");
        LevenshteinError::InternalInconsistency(message)
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        LevenshteinError::InvalidArgument(message.into())
    }

    /// Whether this error points at a defect in the engine rather than at the input.
    pub fn is_internal(&self) -> bool {
        matches!(self, LevenshteinError::InternalInconsistency(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_inconsistency_is_internal() {
        assert!(LevenshteinError::internal("dead end").is_internal());
        assert!(!LevenshteinError::invalid("bad opcode").is_internal());
        assert!(!LevenshteinError::Overflow { rows: 3, cols: 4 }.is_internal());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            LevenshteinError::Overflow { rows: 3, cols: 4 }.to_string(),
            "cost matrix of 3x4 cells exceeds the addressable limit"
        );
        assert_eq!(
            LevenshteinError::invalid("oops").to_string(),
            "invalid argument: oops"
        );
    }
}
