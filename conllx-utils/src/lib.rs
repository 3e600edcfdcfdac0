//! Command-line utilities for CoNLL-X treebanks.
//!
//! The binaries are thin wrappers around the commands in this library:
//!
//! * `conllx-depunct`: remove punctuation from a CoNLL-X treebank.
//! * `conllu-to-conllx`: reduce CoNLL-U data to CoNLL-X rows.

pub mod commands;

mod io;
pub use crate::io::{open_input, open_output};

mod logging;
pub use crate::logging::init_logging;
