use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A document without paragraphs cannot be classified into regions.
    /// Surfaced to the caller instead of being reported as zero violations.
    #[error("document contains no paragraphs")]
    EmptyDocument,
}
