//! Punctuation removal command

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use conllx::io::{ReadSentence, Reader, WriteSentence, Writer};
use conllx_depunct::{Depunctuate, PunctRemover, TagField, PUNCT};

use crate::{init_logging, open_input, open_output};

/// Remove punctuation from a CoNLL-X treebank
///
/// Dependents of punctuation are attached to the head of the punctuation
/// token and the remaining tokens are renumbered.
#[derive(Debug, Parser)]
#[command(name = "conllx-depunct", version)]
pub struct DepunctArgs {
    /// Input treebank (default: stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output treebank (default: stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Part-of-speech tag of punctuation
    #[arg(short = 't', long, value_name = "TAG", default_value = PUNCT)]
    pub punct_tag: String,

    /// Field holding the punctuation tag
    #[arg(short = 'f', long, value_enum, default_value = "cpos")]
    pub tag_field: TagFieldArg,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Part-of-speech fields
#[derive(Debug, Clone, Copy, Eq, PartialEq, clap::ValueEnum)]
pub enum TagFieldArg {
    /// Coarse-grained tag (4th field)
    Cpos,
    /// Fine-grained tag (5th field)
    Pos,
}

impl From<TagFieldArg> for TagField {
    fn from(arg: TagFieldArg) -> Self {
        match arg {
            TagFieldArg::Cpos => TagField::Cpos,
            TagFieldArg::Pos => TagField::Pos,
        }
    }
}

impl DepunctArgs {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose)?;

        log::debug!("Arguments: {:?}", self);

        let input = open_input(self.input.as_deref())?;
        let output = open_output(self.output.as_deref())?;

        self.run(input, output)
    }

    /// Remove punctuation from all sentences of `input`.
    pub fn run(&self, input: impl BufRead, output: impl Write) -> Result<()> {
        let remover =
            PunctRemover::new(self.punct_tag.as_str()).with_tag_field(self.tag_field.into());

        let mut writer = Writer::new(output);
        let mut n_sentences = 0;
        let mut n_self_loops = 0;

        for sentence in Reader::new(input).sentences() {
            let mut sentence = sentence.context("Cannot read sentence")?;
            n_sentences += 1;

            let self_loops = remover
                .depunctuate(&mut sentence)
                .with_context(|| format!("Cannot remove punctuation from sentence {}", n_sentences))?;
            n_self_loops += self_loops.len();

            writer
                .write_sentence(&sentence)
                .context("Cannot write sentence")?;
        }

        writer.flush().context("Cannot write sentence")?;

        log::info!(
            "Processed {} sentences, {} punctuation tokens were their own head",
            n_sentences,
            n_self_loops
        );

        Ok(())
    }
}
