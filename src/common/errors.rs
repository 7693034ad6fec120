use thiserror::Error;

/// Errors raised while building a network or running inference over it.
///
/// Structural problems (duplicate or unknown variables) fail fast during
/// construction. Incomplete tables only surface on `validate()` or when a
/// solver looks up an entry that was never set.
#[derive(Debug, Error)]
pub enum BayesError {
    #[error("variable '{0}' is already declared")]
    DuplicateVariable(String),

    #[error("variable '{0}' is not declared in the network")]
    UnknownVariable(String),

    #[error("'{parent}' is not a parent of '{variable}'")]
    NotAParent { variable: String, parent: String },

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("conditional table of '{variable}' has no entry for true parents {event}")]
    IncompleteTable { variable: String, event: String },

    #[error("conditional table of '{variable}' maps {event} to {probability}, outside [0, 1]")]
    InvalidProbability {
        variable: String,
        event: String,
        probability: f64,
    },

    #[error("cannot normalize a distribution with zero total mass")]
    DegenerateDistribution,

    #[error("variable '{0}' is both evidence and query")]
    EvidenceQueryOverlap(String),

    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BayesError>;
