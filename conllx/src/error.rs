use std::io;

use thiserror::Error;

/// CoNLL-X IO error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Error in file IO.
    #[error("error reading or writing treebank")]
    IO(#[from] io::Error),

    /// CoNLL-X parsing error.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// CoNLL-X field parsing errors.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// The token does not have the requested field.
    #[error("field {field} is missing in token with {len} fields")]
    MissingField { field: usize, len: usize },

    /// An integer field could not be parsed as an integer.
    #[error("cannot parse as integer field: {value:?}")]
    ParseIntField { value: String },
}
