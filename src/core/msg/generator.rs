use serde::{Deserialize, Serialize};

/// Messages specific to GeneratorState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeneratorMsg {
    /// Submit the current description for generation.
    /// Handled at the coordinator level because it reads editor and config state.
    Submit,

    /// Raw response text from a completed generation call
    ResponseReceived(String),

    /// Human-readable message from a failed generation call
    GenerationFailed(String),

    // Result list interaction
    SelectNext,
    SelectPrev,
    Copy(usize),
    CopySelected,
    CopyFeedbackExpired(usize),
}
