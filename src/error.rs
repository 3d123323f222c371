//! Crate-level error type.

use crate::layout::LayoutError;
use crate::live::ExclusivityError;
use crate::markup::MarkupError;
use crate::style::StyleError;

/// Any error raised by the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Exclusivity(#[from] ExclusivityError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
