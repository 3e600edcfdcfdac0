//! Removal of punctuation from CoNLL-X dependency trees.

mod error;
pub use error::DepunctError;

mod depunct;
pub use depunct::{Depunctuate, PunctRemover, SelfLoop, TagField, PUNCT};
