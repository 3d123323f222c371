//! Style specification errors.

/// Errors produced while parsing a style specification such as `bold red on blue`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("Could not find color or decoration '{0}'")]
    UnknownToken(String),

    #[error("{component} must be in the range {min}-{max}, got {value}")]
    ColorOutOfRange {
        component: &'static str,
        min: i64,
        max: i64,
        /// The number as written; it may not fit any integer type.
        value: String,
    },

    #[error("Invalid color literal '{0}'")]
    InvalidColor(String),

    #[error("A link has already been set, cannot also link to '{0}'")]
    DuplicateLink(String),

    #[error("Style already has a {which} color, unexpected '{token}'")]
    DuplicateColor { which: &'static str, token: String },

    #[error("Expected a background color after 'on'")]
    MissingBackground,
}
