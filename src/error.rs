//! Error handling for the exactvec library
//!
//! Every fallible container operation reports one of a small set of error
//! kinds. Most of them are recovered locally: the container is left in its
//! fallback state, the error is logged, and the caller still receives it.

use thiserror::Error;

/// Main error type for the exactvec library
#[derive(Error, Debug)]
pub enum ArrayError {
    /// Operation requires at least one element
    #[error("Array is empty!")]
    EmptyArray,

    /// Supplied index is outside the valid bound for the operation
    #[error("Index out of range: index {index}, size {len}")]
    IndexOutOfRange {
        /// The rejected index
        index: isize,
        /// The array size at the time of the call
        len: usize,
    },

    /// Requested initial size is zero or negative
    #[error("Incorrect array length: {len}")]
    InvalidLength {
        /// The rejected length
        len: isize,
    },

    /// Filter or sort received an operator outside `<`, `>`, `=`
    #[error("Incorrect operator: {symbol:?}")]
    InvalidOperator {
        /// The rejected operator symbol
        symbol: char,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArrayError {
    /// Create an index out of range error
    pub fn index_out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an invalid length error
    pub fn invalid_length(len: isize) -> Self {
        Self::InvalidLength { len }
    }

    /// Create an invalid operator error
    pub fn invalid_operator(symbol: char) -> Self {
        Self::InvalidOperator { symbol }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Short human-readable message for this error
    pub fn show_error(&self) -> &'static str {
        match self {
            Self::EmptyArray => "Array is empty!",
            Self::IndexOutOfRange { .. } => "Index out of range!",
            Self::InvalidLength { .. } => "Incorrect array length!",
            Self::InvalidOperator { .. } => "Incorrect operator!",
            Self::Configuration { .. } => "Invalid configuration!",
            Self::Io(_) => "I/O error!",
        }
    }

    /// Check if this error is recovered locally by the operation that raised it
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::EmptyArray => true,
            Self::IndexOutOfRange { .. } => true,
            Self::InvalidLength { .. } => true,
            Self::InvalidOperator { .. } => false,
            Self::Configuration { .. } => false,
            Self::Io(_) => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyArray => "empty",
            Self::IndexOutOfRange { .. } => "bounds",
            Self::InvalidLength { .. } => "length",
            Self::InvalidOperator { .. } => "operator",
            Self::Configuration { .. } => "config",
            Self::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ArrayError>;

/// Log a locally recovered error according to the active report configuration
/// and hand it back for the caller.
pub(crate) fn recovered(operation: &'static str, error: ArrayError) -> ArrayError {
    let config = crate::config::report_config();
    if config.enabled {
        log::log!(
            config.level.to_log_level(),
            "{}: {}",
            operation,
            error.show_error()
        );
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_error_messages() {
        assert_eq!(ArrayError::EmptyArray.show_error(), "Array is empty!");
        assert_eq!(
            ArrayError::index_out_of_range(-1, 3).show_error(),
            "Index out of range!"
        );
        assert_eq!(
            ArrayError::invalid_length(0).show_error(),
            "Incorrect array length!"
        );
        assert_eq!(
            ArrayError::invalid_operator('?').show_error(),
            "Incorrect operator!"
        );
    }

    #[test]
    fn test_recoverable_kinds() {
        assert!(ArrayError::EmptyArray.is_recoverable());
        assert!(ArrayError::index_out_of_range(5, 2).is_recoverable());
        assert!(ArrayError::invalid_length(-4).is_recoverable());
        assert!(!ArrayError::invalid_operator('%').is_recoverable());
        assert!(!ArrayError::configuration("bad").is_recoverable());
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!ArrayError::from(io_error).is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ArrayError::EmptyArray.category(), "empty");
        assert_eq!(ArrayError::index_out_of_range(9, 1).category(), "bounds");
        assert_eq!(ArrayError::invalid_length(0).category(), "length");
        assert_eq!(ArrayError::invalid_operator('!').category(), "operator");
        assert_eq!(ArrayError::configuration("x").category(), "config");
    }

    #[test]
    fn test_error_display() {
        let bounds = format!("{}", ArrayError::index_out_of_range(7, 3));
        assert!(bounds.contains("Index out of range"));
        assert!(bounds.contains('7'));
        assert!(bounds.contains('3'));

        let operator = format!("{}", ArrayError::invalid_operator('?'));
        assert!(operator.contains("Incorrect operator"));
        assert!(operator.contains('?'));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: ArrayError = io_error.into();
        assert_eq!(error.category(), "io");
        assert!(!error.is_recoverable());
        assert!(format!("{}", error).contains("I/O error"));
    }

    #[test]
    fn test_recovered_returns_same_error() {
        let error = recovered("remove_first", ArrayError::EmptyArray);
        assert!(matches!(error, ArrayError::EmptyArray));
    }
}
