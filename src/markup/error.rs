//! Markup syntax errors.
//!
//! Every variant carries the 0-based character position where parsing stopped.
//! None of them are recoverable: a parse either succeeds completely or fails.

use crate::style::StyleError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("Encountered unescaped ']' token at position {position}")]
    UnescapedBracket { position: usize },

    #[error("Encountered malformed markup tag at position {position}")]
    MalformedTag { position: usize },

    #[error("Encountered closing tag when none was expected near position {position}")]
    UnexpectedClose { position: usize },

    #[error("Unbalanced markup stack: {open} tag(s) still open at end of input (position {position})")]
    UnclosedTags { open: usize, position: usize },

    #[error("A link has already been set in the tag at position {position}")]
    DuplicateLink { position: usize },

    #[error("Invalid style in tag at position {position}: {source}")]
    InvalidStyle {
        position: usize,
        #[source]
        source: StyleError,
    },
}

impl MarkupError {
    pub fn position(&self) -> usize {
        match self {
            MarkupError::UnescapedBracket { position }
            | MarkupError::MalformedTag { position }
            | MarkupError::UnexpectedClose { position }
            | MarkupError::UnclosedTags { position, .. }
            | MarkupError::DuplicateLink { position }
            | MarkupError::InvalidStyle { position, .. } => *position,
        }
    }

    /// Attach a tag position to a style error.
    pub(crate) fn from_style(position: usize, source: StyleError) -> Self {
        match source {
            StyleError::DuplicateLink(_) => MarkupError::DuplicateLink { position },
            source => MarkupError::InvalidStyle { position, source },
        }
    }
}
