//! Error types for pattern decoding and slot validation.
//!
//! Every error here is a contract violation, never a transient failure:
//! decoding either yields a complete `Pattern` or one of these, and the
//! validation queries only fail when called on the wrong kind of pattern.
//! A candidate item being rejected is not an error; it is `Ok(false)`.

use std::fmt;

/// Result of pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;

/// Why a serialized pattern record could not be read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidPatternError {
    /// No record was attached to the pattern.
    Missing,
    /// The record bytes could not be decoded.
    Malformed(String),
    /// The record lists more input slots than the grid has.
    TooManyInputs { count: usize },
}

impl fmt::Display for InvalidPatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPatternError::Missing => write!(f, "no pattern record present"),
            InvalidPatternError::Malformed(reason) => {
                write!(f, "malformed pattern record: {reason}")
            }
            InvalidPatternError::TooManyInputs { count } => write!(
                f,
                "pattern record has {count} input slots, the grid only has {}",
                crafter_item::GRID_SIZE
            ),
        }
    }
}

impl std::error::Error for InvalidPatternError {}

/// Errors raised by pattern construction and queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// The serialized record is absent or malformed.
    InvalidPattern(InvalidPatternError),
    /// A crafting pattern's recorded grid matches no known recipe.
    NoMatchingRecipe,
    /// A grid-matching query was made against a processing pattern.
    UnsupportedOperation { operation: &'static str },
    /// A slot index outside the 3x3 grid was queried.
    SlotOutOfRange { slot: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidPattern(inner) => write!(f, "invalid pattern: {inner}"),
            PatternError::NoMatchingRecipe => {
                write!(f, "recorded crafting grid does not match any known recipe")
            }
            PatternError::UnsupportedOperation { operation } => write!(
                f,
                "`{operation}` is only supported for crafting patterns"
            ),
            PatternError::SlotOutOfRange { slot } => write!(
                f,
                "slot {slot} is outside the crafting grid (0..{})",
                crafter_item::GRID_SIZE
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::InvalidPattern(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<InvalidPatternError> for PatternError {
    fn from(err: InvalidPatternError) -> Self {
        PatternError::InvalidPattern(err)
    }
}

/// Error for a grid-matching query made against a processing pattern.
pub(crate) fn unsupported_for_processing(operation: &'static str) -> PatternError {
    PatternError::UnsupportedOperation { operation }
}
