use conllx::ParseError;
use thiserror::Error;

/// Punctuation removal errors.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum DepunctError {
    /// A field of the sentence could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A head refers to a token beyond the end of the sentence.
    #[error("head {head:?} is out of bounds for sentence with {token_count:?} tokens")]
    HeadOutOfBounds { head: usize, token_count: usize },

    /// A dependent would be attached to the token that is being removed.
    ///
    /// This happens when punctuation that is its own head has dependents,
    /// e.g. in a cycle of punctuation tokens.
    #[error("dependent {dependent:?} would be attached to removed token {removed:?}")]
    InconsistentHead { dependent: usize, removed: usize },
}
