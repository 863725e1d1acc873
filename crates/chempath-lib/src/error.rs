use thiserror::Error;

/// Convenient result alias for the chempath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The shortest-pathway query itself never fails: unreachable targets and
/// unknown start compounds are reported as `None`. These variants cover the
/// planning and input layers built on top of it.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a compound name could not be found in the reaction graph.
    #[error("unknown compound: {name}{}", format_suggestions(.suggestions))]
    UnknownCompound {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no pathway connects the two compounds.
    #[error("no pathway found between {start} and {goal}")]
    PathwayNotFound { start: String, goal: String },

    /// Raised by validating insertion when a reaction cannot be accepted.
    #[error("invalid reaction {source_compound} -> {destination}: {reason}")]
    InvalidReaction {
        source_compound: String,
        destination: String,
        reason: String,
    },

    /// Raised when a textual reaction line does not match `<source> <destination> <cost>`.
    #[error("malformed reaction line '{line}': {reason}")]
    MalformedReaction { line: String, reason: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
