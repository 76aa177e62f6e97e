use thiserror::Error;

/// Errors surfaced while building a grid.
///
/// Interaction handlers never fail; they treat bad input as a no-op. Only
/// construction and the layout parsers return these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid column track list: {0}")]
    InvalidTrackList(String),

    #[error("Grid container not found")]
    MissingContainer,

    #[error("DOM error: {0}")]
    Dom(String),
}

impl GridError {
    /// Stable machine-readable code for the binding layer
    pub fn code(&self) -> &'static str {
        match self {
            GridError::InvalidConfig(_) => "INVALID_CONFIG",
            GridError::InvalidTrackList(_) => "INVALID_TRACK_LIST",
            GridError::MissingContainer => "MISSING_CONTAINER",
            GridError::Dom(_) => "DOM_ERROR",
        }
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::InvalidConfig(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
