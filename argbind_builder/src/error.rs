use thiserror::Error;

use crate::api::BindError;
use crate::model::Cardinality;

/// The kind of a [`ParseError`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A token matched no parser.
    UnrecognizedToken,
    /// A token could not convert into the destination's type.
    Conversion,
    /// A callback destination rejected its converted value.
    Application,
    /// A parser matched too few or too many times.
    Cardinality,
    /// An option expecting a value was not given one.
    MissingValue,
}

/// The failure of a parse.
///
/// Matching errors (all but [`ParseError::Cardinality`]) abort the parse as soon as they happen.
/// Cardinality errors are only detected by `Parser::validate`, after matching completes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token matched no parser.
    #[error("Unrecognized token '{token}'.")]
    UnrecognizedToken {
        /// The offending token.
        token: String,
    },

    /// A token could not convert into the destination's type.
    #[error("'{token}' cannot convert to {type_name}.")]
    Conversion {
        /// The offending token.
        token: String,
        /// The destination type.
        type_name: &'static str,
    },

    /// A callback destination rejected its converted value.
    #[error("'{token}' was rejected: {message}.")]
    Application {
        /// The offending token.
        token: String,
        /// The callback's reason.
        message: String,
    },

    /// A parser matched too few or too many times.
    #[error("Parameter '{name}' expects {expected} match(es), but matched {observed}.")]
    Cardinality {
        /// The parser's name or hint.
        name: String,
        /// The declared cardinality.
        expected: Cardinality,
        /// The number of matches.
        observed: usize,
    },

    /// An option expecting a value was not given one.
    #[error("Option '{option}' expects a value.")]
    MissingValue {
        /// The option token.
        option: String,
    },
}

impl ParseError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnrecognizedToken { .. } => ErrorKind::UnrecognizedToken,
            ParseError::Conversion { .. } => ErrorKind::Conversion,
            ParseError::Application { .. } => ErrorKind::Application,
            ParseError::Cardinality { .. } => ErrorKind::Cardinality,
            ParseError::MissingValue { .. } => ErrorKind::MissingValue,
        }
    }
}

impl From<BindError> for ParseError {
    fn from(error: BindError) -> Self {
        match error {
            BindError::Conversion { token, type_name } => {
                ParseError::Conversion { token, type_name }
            }
            BindError::Application { token, message } => {
                ParseError::Application { token, message }
            }
        }
    }
}
