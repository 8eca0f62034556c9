use thiserror::Error;

use crate::validate::ValidationErrors;

pub type SlugResult<T> = Result<T, SlugError>;

#[derive(Debug, Error)]
pub enum SlugError {
    /// Unforced write to the cache column while lock mode is disabled.
    #[error("cannot assign `{column}` on `{record}`: slug is derived (enable lock mode to set it manually)")]
    NotAssignable { column: String, record: &'static str },

    #[error("invalid slug configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

impl SlugError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
