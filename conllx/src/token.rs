//! CoNLL-X tokens.

use std::fmt;
use std::mem;

use itertools::Itertools;

use crate::error::ParseError;

pub const EMPTY_TOKEN: &str = "_";

/// Token identifier field.
pub const ID: usize = 0;

/// Word form field.
pub const FORM: usize = 1;

/// Lemma field.
pub const LEMMA: usize = 2;

/// Coarse-grained part-of-speech tag field.
pub const CPOS: usize = 3;

/// Fine-grained part-of-speech tag field.
pub const POS: usize = 4;

/// Features field.
pub const FEATS: usize = 5;

/// Head field.
pub const HEAD: usize = 6;

/// Dependency relation field.
pub const DEPREL: usize = 7;

/// Projective head field.
pub const PHEAD: usize = 8;

/// Projective dependency relation field.
pub const PDEPREL: usize = 9;

/// Number of fields in a complete CoNLL-X row.
pub const N_FIELDS: usize = 10;

/// A builder for `Token`s.
///
/// A `Token` stores the raw fields of a CoNLL-X row. Constructing a full
/// row by hand is tedious, this builder provides a fluent interface that
/// fills absent fields with `_`.
pub struct TokenBuilder {
    token: Token,
}

impl TokenBuilder {
    /// Create a `Token` builder for the token with the given identifier
    /// and form. All other fields are set to absent.
    pub fn new(index: usize, form: impl Into<String>) -> TokenBuilder {
        let mut fields = vec![EMPTY_TOKEN.to_owned(); N_FIELDS];
        fields[ID] = index.to_string();
        fields[FORM] = form.into();

        TokenBuilder {
            token: Token::new(fields),
        }
    }

    /// Set the lemma or stem of the word form.
    pub fn lemma(self, lemma: impl Into<String>) -> TokenBuilder {
        self.field(LEMMA, lemma)
    }

    /// Set the coarse-grained part-of-speech tag.
    pub fn cpos(self, cpos: impl Into<String>) -> TokenBuilder {
        self.field(CPOS, cpos)
    }

    /// Set the fine-grained part-of-speech tag.
    pub fn pos(self, pos: impl Into<String>) -> TokenBuilder {
        self.field(POS, pos)
    }

    /// Set the head of the token, 0 is the root.
    pub fn head(mut self, head: usize) -> TokenBuilder {
        self.token.set_head(head);
        self
    }

    /// Set the relation of the token to its head.
    pub fn deprel(self, deprel: impl Into<String>) -> TokenBuilder {
        self.field(DEPREL, deprel)
    }

    fn field(mut self, idx: usize, value: impl Into<String>) -> TokenBuilder {
        self.token.set_field(idx, value);
        self
    }
}

impl From<Token> for TokenBuilder {
    fn from(token: Token) -> Self {
        TokenBuilder { token }
    }
}

impl From<TokenBuilder> for Token {
    fn from(builder: TokenBuilder) -> Self {
        builder.token
    }
}

/// A CoNLL-X token.
///
/// The token is stored as the ordered fields of its row. Fields are never
/// interpreted on reading, so that any row survives a read/write round
/// trip. The accessors for the identifier and head parse on demand.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    fields: Vec<String>,
}

impl Token {
    /// Create a token from the fields of a row.
    pub fn new(fields: impl Into<Vec<String>>) -> Token {
        Token {
            fields: fields.into(),
        }
    }

    /// Get all fields of the token.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Unwrap the fields of the token.
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    /// Get the field at `idx`, if present.
    pub fn field(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(String::as_str)
    }

    /// Set the field at `idx`.
    ///
    /// Missing fields before `idx` are filled with `_`. Returns the field
    /// that is replaced.
    pub fn set_field(&mut self, idx: usize, value: impl Into<String>) -> Option<String> {
        if idx >= self.fields.len() {
            self.fields.resize(idx + 1, EMPTY_TOKEN.to_owned());
            self.fields[idx] = value.into();
            return None;
        }

        Some(mem::replace(&mut self.fields[idx], value.into()))
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the token has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the word form.
    pub fn form(&self) -> Option<&str> {
        self.field(FORM)
    }

    /// Get the coarse-grained part-of-speech tag.
    pub fn cpos(&self) -> Option<&str> {
        self.field(CPOS)
    }

    /// Get the fine-grained part-of-speech tag.
    pub fn pos(&self) -> Option<&str> {
        self.field(POS)
    }

    /// Parse the 1-based token identifier.
    pub fn index(&self) -> Result<usize, ParseError> {
        self.numeric_field(ID)
    }

    /// Set the token identifier.
    pub fn set_index(&mut self, index: usize) -> Option<String> {
        self.set_field(ID, index.to_string())
    }

    /// Parse the 1-based head of the token, 0 is the root.
    pub fn head(&self) -> Result<usize, ParseError> {
        self.numeric_field(HEAD)
    }

    /// Set the head of the token.
    pub fn set_head(&mut self, head: usize) -> Option<String> {
        self.set_field(HEAD, head.to_string())
    }

    fn numeric_field(&self, idx: usize) -> Result<usize, ParseError> {
        let value = self.field(idx).ok_or(ParseError::MissingField {
            field: idx,
            len: self.len(),
        })?;

        value.parse::<usize>().map_err(|_| ParseError::ParseIntField {
            value: value.to_owned(),
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fields.iter().join("\t"))
    }
}

impl<S> From<Vec<S>> for Token
where
    S: Into<String>,
{
    fn from(fields: Vec<S>) -> Self {
        Token::new(fields.into_iter().map(Into::into).collect::<Vec<_>>())
    }
}
