use thiserror::Error;

/// Everything that can go wrong building or driving a `Circle`.
///
/// All of these surface before the move loop starts; a simulation either
/// fails validation up front or runs to completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircleError {
    /// Malformed initial ordering: repeats, zeroes, or labels that do not
    /// form a contiguous run starting at 1.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A label outside `1..=len` was handed to a lookup.
    #[error("cup {label} out of range 1..={max}")]
    OutOfRange { label: u32, max: u32 },

    /// A move lifts a run of three and needs a destination outside it, so
    /// any playable circle holds at least four cups.
    #[error("a game needs at least 4 cups, got {0}")]
    InsufficientLabels(u32),
}
