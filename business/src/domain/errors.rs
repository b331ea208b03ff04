/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The backing source is missing or cannot be read.
    #[error("repository.source_unavailable")]
    SourceUnavailable,
    /// The backing source was read but is not a collection of records.
    #[error("repository.source_corrupt")]
    SourceCorrupt,
    #[error("repository.already_loaded")]
    AlreadyLoaded,
}

impl RepositoryError {
    pub fn source_unavailable() -> Self {
        RepositoryError::SourceUnavailable
    }
    pub fn source_corrupt() -> Self {
        RepositoryError::SourceCorrupt
    }
    pub fn already_loaded() -> Self {
        RepositoryError::AlreadyLoaded
    }

    /// Load failures abort startup; the service must not serve without a catalog.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RepositoryError::SourceUnavailable | RepositoryError::SourceCorrupt
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_unreadable_or_corrupt_source_as_fatal() {
        assert!(RepositoryError::source_unavailable().is_fatal());
        assert!(RepositoryError::source_corrupt().is_fatal());
        assert!(!RepositoryError::already_loaded().is_fatal());
    }

    #[test]
    fn should_render_code_style_messages() {
        assert_eq!(
            RepositoryError::SourceUnavailable.to_string(),
            "repository.source_unavailable"
        );
        assert_eq!(
            RepositoryError::AlreadyLoaded.to_string(),
            "repository.already_loaded"
        );
    }
}
