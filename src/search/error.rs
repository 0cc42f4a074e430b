use thiserror::Error;

/// Errors raised while constructing a problem or running a search. Note that
/// failing to find a plan is not an error, see
/// [`SearchResult::ProvablyUnsolvable`](crate::search::search_engines::SearchResult).
#[derive(Debug, Error)]
pub enum SearchError {
    /// The transition function was handed an action that the problem does not
    /// enumerate in the given state. This points at a bug in the problem
    /// definition and aborts the search.
    #[error("action {action} is illegal in state {state}")]
    IllegalAction { action: String, state: String },
    /// The problem description is inconsistent, e.g. the layout length does
    /// not match the shape.
    #[error("malformed problem description: {0}")]
    MalformedProblem(String),
    /// Tried to pop from an empty frontier.
    #[error("frontier is empty")]
    EmptyFrontier,
    /// Tried to look up or update a state that is not in the frontier.
    #[error("state {0} is not in the frontier")]
    NotQueued(String),
    /// A plan returned by a search does not reach the goal when replayed.
    #[error("plan does not reach the goal")]
    InvalidPlan,
    #[error("failed to read problem description: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON problem description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse TOML problem description: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SearchError {
    pub fn illegal_action(action: &impl std::fmt::Debug, state: &impl std::fmt::Debug) -> Self {
        Self::IllegalAction {
            action: format!("{:?}", action),
            state: format!("{:?}", state),
        }
    }
}
