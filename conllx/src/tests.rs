use std::fs::File;
use std::io::BufReader;

use lazy_static::lazy_static;

use crate::io::{ReadSentence, Reader};
use crate::sentence::Sentence;
use crate::token::TokenBuilder;

lazy_static! {
    pub static ref TEST_SENTENCES: Vec<Sentence> = {
        let mut sentences = Vec::new();

        let mut s1 = Sentence::new();
        s1.push(
            TokenBuilder::new(1, "Die")
                .lemma("die")
                .cpos("DET")
                .pos("ART")
                .head(2)
                .deprel("det")
                .into(),
        );
        s1.push(
            TokenBuilder::new(2, "Großaufnahme")
                .lemma("Großaufnahme")
                .cpos("NOUN")
                .pos("NN")
                .head(0)
                .deprel("root")
                .into(),
        );
        s1.push(
            TokenBuilder::new(3, ".")
                .lemma(".")
                .cpos("PUNCT")
                .pos("$.")
                .head(2)
                .deprel("punct")
                .into(),
        );
        sentences.push(s1);

        let mut s2 = Sentence::new();
        s2.push(
            TokenBuilder::new(1, "Gilles")
                .lemma("Gilles")
                .cpos("PROPN")
                .pos("NE")
                .head(0)
                .deprel("root")
                .into(),
        );
        s2.push(
            TokenBuilder::new(2, "Deleuze")
                .lemma("Deleuze")
                .cpos("PROPN")
                .pos("NE")
                .head(1)
                .deprel("flat")
                .into(),
        );
        sentences.push(s2);

        sentences
    };
}

pub fn read_sentences(filename: &str) -> Vec<Sentence> {
    Reader::new(BufReader::new(File::open(filename).unwrap()))
        .sentences()
        .map(|s| s.unwrap())
        .collect()
}
