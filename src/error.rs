use thiserror::Error;

/// Errors that can occur at the analyzer's input/output boundaries.
///
/// Classification itself never fails: [`crate::analyze_web_elements`] always
/// returns a well-formed analysis and degrades internally instead of
/// propagating errors. This type covers the JSON boundary where element
/// payloads enter and analyses leave the crate.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The element payload was structurally valid JSON but not a recognized
    /// element-group shape
    #[error("Invalid element input: {0}")]
    InvalidInput(String),

    /// Serialization or deserialization of elements/analyses failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;
