/// Error type for survey definition loading.
///
/// Loading is the only fallible surface of this crate: once a definition
/// has parsed and validated, all further operations are total.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// The definition JSON could not be parsed.
    #[error("invalid survey definition: {0}")]
    Parse(#[from] serde_json::Error),

    /// A question id appears more than once across the survey.
    #[error("duplicate question id {0} in survey definition")]
    DuplicateQuestionId(u32),

    /// Phase ids must be sequential starting at 1.
    #[error("phase id {actual} out of sequence, expected {expected}")]
    PhaseOutOfSequence { expected: u32, actual: u32 },
}
