//! CoNLL-U to CoNLL-X conversion command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use conllx::filter::to_conllx;

use crate::{init_logging, open_input, open_output};

/// Reduce CoNLL-U data to CoNLL-X rows
///
/// Comment lines and multi-word token ranges are removed, all other
/// lines are copied.
#[derive(Debug, Parser)]
#[command(name = "conllu-to-conllx", version)]
pub struct ToConllxArgs {
    /// Input CoNLL-U data (default: stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output CoNLL-X data (default: stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ToConllxArgs {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose)?;

        log::debug!("Arguments: {:?}", self);

        let input = open_input(self.input.as_deref())?;
        let output = open_output(self.output.as_deref())?;

        let dropped = to_conllx(input, output).context("Cannot convert to CoNLL-X")?;
        log::info!("Dropped {} comment and multi-word token lines", dropped);

        Ok(())
    }
}
