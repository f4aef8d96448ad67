use std::error::Error;
use std::fmt::{Display, Formatter};

/// Common error type for Neuraxis data operations.
///
/// Provides structured error handling for symbolic lookups and container
/// access across the kernel's core data structures.
///
/// # Examples
/// ```
/// use neuraxis_structures::NeuraxisDataError;
///
/// fn check_index(index: usize, len: usize) -> Result<(), NeuraxisDataError> {
///     if index >= len {
///         return Err(NeuraxisDataError::OutOfRange(format!(
///             "index {} beyond length {}",
///             index, len
///         )));
///     }
///     Ok(())
/// }
///
/// assert!(check_index(3, 3).is_err());
/// assert!(check_index(2, 3).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NeuraxisDataError {
    /// Index at or beyond the cardinality of a container
    OutOfRange(String),
    /// A name token that the queried interner never issued
    UnknownName(String),
    /// Invalid parameters provided to a function
    BadParameters(String),
    /// Internal error indicating a bug (please report)
    InternalError(String),
}

impl Display for NeuraxisDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NeuraxisDataError::OutOfRange(msg) => write!(f, "Out Of Range: {}", msg),
            NeuraxisDataError::UnknownName(msg) => write!(f, "Unknown Name: {}", msg),
            NeuraxisDataError::BadParameters(msg) => write!(f, "Bad Parameters: {}", msg),
            NeuraxisDataError::InternalError(msg) => write!(
                f,
                "Internal Error, please raise an issue on Github: {}",
                msg
            ),
        }
    }
}
impl Error for NeuraxisDataError {}
