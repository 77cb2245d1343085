use std::fmt;

/// Error type representing the ways a size string can be rejected.
///
/// Blank input is a caller mistake and is reported as [`ParseSizeError::MissingInput`]
/// by every parsing entry point. Everything else is an ordinary format failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSizeError {
    /// The input was missing, empty or contained only whitespace.
    #[error("size string is missing, empty or whitespace")]
    MissingInput,

    /// The input was present but is not a size.
    ///
    /// Carries the rejected input and the reason it was rejected.
    #[error("'{input}' is not in the correct format: {issue}")]
    Format { input: String, issue: FormatIssue },
}

impl ParseSizeError {
    pub(crate) fn format<S: Into<String>>(input: S, issue: FormatIssue) -> Self {
        ParseSizeError::Format {
            input: input.into(),
            issue,
        }
    }
}

/// Why a non-blank size string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    /// Only digits and dots were found, so there is no unit.
    MissingSuffix,

    /// The text before the unit is not a decimal number.
    InvalidNumber,

    /// The unit is not one of the recognised symbols.
    UnknownSuffix(String),

    /// A bit count had a fractional part.
    FractionalBits,
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatIssue::MissingSuffix => write!(f, "missing unit suffix"),
            FormatIssue::InvalidNumber => write!(f, "missing or invalid number"),
            FormatIssue::UnknownSuffix(suffix) => write!(f, "unknown unit suffix '{}'", suffix),
            FormatIssue::FractionalBits => write!(f, "bits cannot be fractional"),
        }
    }
}
