//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used across this crate, so that every
//! failed builder call reports which input contract was violated.

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which all builder failures are reported as.
///
/// The error is split into a general message, an [ErrorType] describing which contract was
/// violated, and an optional context string. The context is populated with a rendition of the
/// offending input where one is available.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// The kind of input contract an [Error] reports as violated.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// A constructor received a second argument that is neither an alias nor an argument map.
    InvalidArgument,
    /// An alias object in a selection list carried more or less than exactly one entry.
    AmbiguousAlias,
    /// A selection list contained an item of an unrecognized shape.
    UnsupportedSelectionValue,
    /// A selection was requested but no usable selection items were supplied.
    MissingSelection,
    /// An enum token was constructed from an empty raw value.
    InvalidEnumValue,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: ErrorType) -> Self {
        Self {
            message: message.into(),
            context: None,
            error_type,
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(message: S, context: S, error_type: ErrorType) -> Self {
        Self {
            message: message.into(),
            context: Some(context.into()),
            error_type,
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the kind of contract violation this error reports.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.error_type {
            ErrorType::InvalidArgument => {
                format!("Invalid Argument Error: {}", self.message)
            }
            ErrorType::AmbiguousAlias => {
                format!("Ambiguous Alias Error: {}", self.message)
            }
            ErrorType::UnsupportedSelectionValue => {
                format!("Unsupported Selection Error: {}", self.message)
            }
            ErrorType::MissingSelection => {
                format!("Missing Selection Error: {}", self.message)
            }
            ErrorType::InvalidEnumValue => {
                format!("Invalid Enum Error: {}", self.message)
            }
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}
