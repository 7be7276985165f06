//! Analyzer error types

/// Errors raised while reducing a single compiled rule.
///
/// These are recoverable: the analysis pass drops the offending rule with
/// a diagnostic and continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Selector carries no utility class: '{0}'")]
    UnsupportedSelector(String),

    #[error("Rule for '{0}' declares no properties")]
    EmptyDeclarationBlock(String),
}

/// Result type alias for analyzer operations
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
