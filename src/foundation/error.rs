/// Convenience result type used across Vitrine.
pub type VitrineResult<T> = Result<T, VitrineError>;

/// Top-level error taxonomy used by the store, the projector and the session.
#[derive(thiserror::Error, Debug)]
pub enum VitrineError {
    /// An update addressed something that is not a leaf of the configuration schema.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Import text was not well-formed JSON (or not a JSON object).
    #[error("parse error: {0}")]
    Parse(String),

    /// The projector was handed a configuration without a required leaf.
    #[error("missing leaf: {0}")]
    MissingLeaf(String),

    /// A leaf value failed type coercion or its range/enum constraint.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from collaborators or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VitrineError {
    /// Build a [`VitrineError::InvalidPath`] value.
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Build a [`VitrineError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`VitrineError::MissingLeaf`] value.
    pub fn missing_leaf(msg: impl Into<String>) -> Self {
        Self::MissingLeaf(msg.into())
    }

    /// Build a [`VitrineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VitrineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether an editing session can carry on after this error.
    ///
    /// Bad user input (`Parse`, `Validation`) and IO failures are recoverable: the
    /// store is untouched and the user gets a notice. `InvalidPath` and `MissingLeaf`
    /// point at wiring bugs or a corrupted store and must not be swallowed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Parse(_) | Self::Validation(_) | Self::Other(_) => true,
            Self::InvalidPath(_) | Self::MissingLeaf(_) | Self::Serde(_) => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
