//! Error types for misuse of producers and combinators.
//!
//! Early termination is not an error and never shows up here; see
//! [`control`](crate::control). Panics raised inside a producer are not
//! converted either: they pass through every combinator untouched.

use std::fmt;

#[cfg(feature = "channel")]
use crate::bridge::runtime::BlockingError;

/// Represents a misuse of the producer API, reported at the call that detected it.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
/// use continuable::ContinuableError;
///
/// let error = from_iter(1..=3).nth(5).unwrap_err();
/// assert_eq!(error, ContinuableError::IndexOutOfBounds { index: 5, length: 3 });
/// assert_eq!(format!("{error}"), "index 5 is out of bounds for a producer of length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContinuableError {
    /// A strict reduction was asked to reduce a producer with no elements.
    Empty {
        /// The name of the reducing operation.
        operation: &'static str,
    },
    /// An element was requested past the end of a producer.
    IndexOutOfBounds {
        /// The requested (0-based) index.
        index: usize,
        /// The number of elements the producer actually yielded.
        length: usize,
    },
    /// A combinator was constructed with an argument it cannot work with.
    InvalidArgument {
        /// The name of the combinator.
        combinator: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },
    /// `collect_with_len` was given a length that does not match the producer.
    LengthMismatch {
        /// The length the caller promised.
        expected: usize,
        /// The number of elements the producer yielded.
        actual: usize,
    },
    /// The channel bridge cannot block in the current runtime context.
    #[cfg(feature = "channel")]
    Blocking(BlockingError),
}

impl ContinuableError {
    pub(crate) const fn invalid_argument(combinator: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { combinator, reason }
    }
}

impl fmt::Display for ContinuableError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { operation } => {
                write!(formatter, "{operation}: producer yielded no elements")
            }
            Self::IndexOutOfBounds { index, length } => write!(
                formatter,
                "index {index} is out of bounds for a producer of length {length}"
            ),
            Self::InvalidArgument { combinator, reason } => {
                write!(formatter, "{combinator}: {reason}")
            }
            Self::LengthMismatch { expected, actual } => write!(
                formatter,
                "collect_with_len: expected {expected} elements, producer yielded {actual}"
            ),
            #[cfg(feature = "channel")]
            Self::Blocking(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ContinuableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "channel")]
            Self::Blocking(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(feature = "channel")]
impl From<BlockingError> for ContinuableError {
    fn from(error: BlockingError) -> Self {
        Self::Blocking(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ContinuableError::Empty { operation: "reduce_strict" }, "reduce_strict: producer yielded no elements")]
    #[case(
        ContinuableError::IndexOutOfBounds { index: 7, length: 2 },
        "index 7 is out of bounds for a producer of length 2"
    )]
    #[case(
        ContinuableError::invalid_argument("partition", "chunk size must be greater than zero"),
        "partition: chunk size must be greater than zero"
    )]
    #[case(
        ContinuableError::LengthMismatch { expected: 4, actual: 3 },
        "collect_with_len: expected 4 elements, producer yielded 3"
    )]
    fn test_display(#[case] error: ContinuableError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_source_is_none_for_misuse_errors() {
        use std::error::Error;

        let error = ContinuableError::Empty { operation: "reduce_strict" };
        assert!(error.source().is_none());
    }

    #[cfg(feature = "channel")]
    #[rstest]
    fn test_blocking_error_converts_and_exposes_source() {
        use std::error::Error;

        let error: ContinuableError = BlockingError::CurrentThreadRuntime.into();
        assert_eq!(error, ContinuableError::Blocking(BlockingError::CurrentThreadRuntime));
        assert!(error.source().is_some());
    }
}
