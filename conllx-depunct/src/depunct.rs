//! Punctuation removal.

use std::iter;
use std::mem;

use conllx::token::{CPOS, POS};
use conllx::{Sentence, Token};
use petgraph::graph::{node_index, DiGraph, NodeIndex};
use petgraph::Direction;

use crate::DepunctError;

/// The default punctuation tag.
pub const PUNCT: &str = "PUNCT";

/// Head graph of a sentence. Node 0 is the root, node `i` is the token
/// with identifier `i`. Every token node has exactly one incoming edge.
type HeadGraph = DiGraph<(), ()>;

/// Punctuation remover.
pub trait Depunctuate {
    /// Remove punctuation from a sentence.
    ///
    /// Dependents of removed tokens are attached to the head of the
    /// removed token and the remaining tokens are renumbered. Returns
    /// the removed tokens that were their own head. These are anomalies
    /// in the input, but do not prevent removal.
    ///
    /// The identifier and head of every token are validated first, so a
    /// sentence without punctuation can still return an error. The
    /// sentence is not modified when an error is returned.
    fn depunctuate(&self, sentence: &mut Sentence) -> Result<Vec<SelfLoop>, DepunctError>;
}

/// Removed punctuation token that was its own head.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelfLoop {
    /// Identifier of the token in the input sentence.
    pub position: usize,

    /// The row of the removed token.
    pub token: Token,
}

/// The field that holds the part-of-speech tag that marks punctuation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TagField {
    /// Coarse-grained tag.
    Cpos,

    /// Fine-grained tag.
    Pos,
}

impl TagField {
    fn field(self) -> usize {
        match self {
            TagField::Cpos => CPOS,
            TagField::Pos => POS,
        }
    }
}

impl Default for TagField {
    fn default() -> Self {
        TagField::Cpos
    }
}

/// Removes tokens with a punctuation tag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PunctRemover {
    tag: String,
    tag_field: TagField,
}

impl PunctRemover {
    /// Construct a remover for tokens with the given coarse-grained tag.
    pub fn new(tag: impl Into<String>) -> Self {
        PunctRemover {
            tag: tag.into(),
            tag_field: TagField::default(),
        }
    }

    /// Use the given field for the punctuation tag.
    pub fn with_tag_field(mut self, tag_field: TagField) -> Self {
        self.tag_field = tag_field;
        self
    }

    /// Get the punctuation tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get the field that holds the punctuation tag.
    pub fn tag_field(&self) -> TagField {
        self.tag_field
    }

    fn is_punct(&self, token: &Token) -> bool {
        token.field(self.tag_field.field()) == Some(self.tag.as_str())
    }
}

impl Default for PunctRemover {
    fn default() -> Self {
        PunctRemover::new(PUNCT)
    }
}

impl Depunctuate for PunctRemover {
    fn depunctuate(&self, sentence: &mut Sentence) -> Result<Vec<SelfLoop>, DepunctError> {
        let mut graph = head_graph(sentence)?;

        // removed[0] is the root.
        let removed: Vec<bool> = iter::once(false)
            .chain(sentence.iter().map(|token| self.is_punct(token)))
            .collect();

        if !removed.contains(&true) {
            return Ok(Vec::new());
        }

        // Splice out punctuation from left to right, so that the
        // dependents of a chain of punctuation end up at the first
        // remaining ancestor.
        let mut self_loops = Vec::new();
        for position in (1..removed.len()).filter(|&position| removed[position]) {
            if splice(&mut graph, position)? {
                let token = sentence[position - 1].clone();
                log::warn!("punctuation token is its own head: {}", token);
                self_loops.push(SelfLoop { position, token });
            }
        }

        let remap = remapping(&removed);
        let tokens = mem::take(sentence).into_tokens();
        *sentence = tokens
            .into_iter()
            .enumerate()
            .filter(|&(idx, _)| !removed[idx + 1])
            .map(|(idx, mut token)| {
                let head = graph
                    .neighbors_directed(node_index(idx + 1), Direction::Incoming)
                    .next()
                    .expect("Token without an incoming edge");
                token.set_index(remap[idx + 1]);
                token.set_head(remap[head.index()]);
                token
            })
            .collect();

        log::trace!(
            "removed {} punctuation tokens, {} tokens remain",
            removed.len() - 1 - sentence.len(),
            sentence.len()
        );

        Ok(self_loops)
    }
}

/// Construct the head graph of a sentence.
///
/// This validates the identifier and head fields of all tokens.
fn head_graph(sentence: &Sentence) -> Result<HeadGraph, DepunctError> {
    let mut graph = HeadGraph::with_capacity(sentence.len() + 1, sentence.len());
    for _ in 0..=sentence.len() {
        graph.add_node(());
    }

    for (idx, token) in sentence.iter().enumerate() {
        token.index()?;

        let head = token.head()?;
        if head > sentence.len() {
            return Err(DepunctError::HeadOutOfBounds {
                head,
                token_count: sentence.len(),
            });
        }

        graph.add_edge(node_index(head), node_index(idx + 1), ());
    }

    Ok(graph)
}

/// Attach the dependents of `position` to its head and detach `position`
/// from the graph.
///
/// Returns `true` if the token at `position` is its own head.
fn splice(graph: &mut HeadGraph, position: usize) -> Result<bool, DepunctError> {
    let node = node_index(position);
    let head = graph
        .neighbors_directed(node, Direction::Incoming)
        .next()
        .expect("Token without an incoming edge");
    let self_loop = head == node;

    let mut dependents: Vec<NodeIndex> = graph
        .neighbors_directed(node, Direction::Outgoing)
        .filter(|&dependent| dependent != node)
        .collect();
    dependents.sort();

    if self_loop {
        if let Some(dependent) = dependents.first() {
            return Err(DepunctError::InconsistentHead {
                dependent: dependent.index(),
                removed: position,
            });
        }
    }

    for dependent in dependents {
        let edge = graph
            .find_edge(node, dependent)
            .expect("Dependent edge could not be found");
        graph.remove_edge(edge);
        graph.add_edge(head, dependent, ());
    }

    // Edge indices shift on removal, look up the head edge afresh.
    let head_edge = graph
        .find_edge(head, node)
        .expect("Head edge could not be found");
    graph.remove_edge(head_edge);

    Ok(self_loop)
}

/// Map identifiers in the input sentence to identifiers after removal.
///
/// Removed tokens are mapped to the identifier of their successor, they
/// are never looked up. The root stays 0.
fn remapping(removed: &[bool]) -> Vec<usize> {
    let mut remap = Vec::with_capacity(removed.len());
    let mut next = 0;
    for &is_removed in removed {
        remap.push(next);
        if !is_removed {
            next += 1;
        }
    }

    remap
}
