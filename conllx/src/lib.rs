//! Reading, writing and filtering of CoNLL-X treebanks.

mod error;
pub use crate::error::{Error, ParseError};

pub mod filter;

pub mod io;

pub mod sentence;
pub use crate::sentence::Sentence;

pub mod token;
pub use crate::token::{Token, TokenBuilder};

#[cfg(test)]
mod tests;
