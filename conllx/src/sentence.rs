//! Sentences.

use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

use crate::token::Token;

/// A CoNLL-X sentence.
///
/// `Sentence` stores the tokens of a sentence in sentence order. Unlike
/// the token identifiers, indexing a sentence is 0-based: the token with
/// identifier 1 is `sentence[0]`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Construct an empty sentence.
    pub fn new() -> Self {
        Sentence { tokens: Vec::new() }
    }

    /// Add a token to the sentence.
    ///
    /// Tokens should always be pushed in sentence order. Returns the
    /// 1-based position of the token.
    pub fn push(&mut self, token: Token) -> usize {
        self.tokens.push(token);
        self.tokens.len()
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the tokens of the sentence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Unwrap the tokens of the sentence.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Get an iterator over the tokens.
    pub fn iter(&self) -> slice::Iter<Token> {
        self.tokens.iter()
    }

    /// Get a mutable iterator over the tokens.
    pub fn iter_mut(&mut self) -> slice::IterMut<Token> {
        self.tokens.iter_mut()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{}", token)?;
        }

        Ok(())
    }
}

impl From<Vec<Token>> for Sentence {
    fn from(tokens: Vec<Token>) -> Self {
        Sentence { tokens }
    }
}

impl FromIterator<Token> for Sentence {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Token>,
    {
        Sentence {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Sentence {
    type Item = Token;
    type IntoIter = vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Sentence {
    type Item = &'a mut Token;
    type IntoIter = slice::IterMut<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl Index<usize> for Sentence {
    type Output = Token;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.tokens[idx]
    }
}

impl IndexMut<usize> for Sentence {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.tokens[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::Sentence;
    use crate::token::{Token, TokenBuilder};

    #[test]
    fn push_returns_position() {
        let mut s = Sentence::new();
        assert!(s.is_empty());
        assert_eq!(s.push(TokenBuilder::new(1, "Gilles").into()), 1);
        assert_eq!(s.push(TokenBuilder::new(2, "Deleuze").into()), 2);
        assert_eq!(s.len(), 2);
        assert_eq!(s[1].form(), Some("Deleuze"));
    }

    #[test]
    fn display_one_token_per_line() {
        let s: Sentence = vec![
            Token::from(vec!["1", "Gilles"]),
            Token::from(vec!["2", "Deleuze"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(s.to_string(), "1\tGilles\n2\tDeleuze\n");
    }
}
