//! Java lexical boundaries as sub-word split points.
//!
//! The mapper lexes a [`NormalizedString`] and turns each token's
//! 1-based column into a half-open character span, returning one
//! offset-preserving sub-view per token. A sub-word tokenizer uses those
//! views as hard split points before applying its own algorithm.

use crate::lexer::{self, LexError};
use crate::normalized::NormalizedString;

/// Why a split pass produced no result.
///
/// Both classes collapse to an empty split sequence at the public
/// boundary ([`token_splits`]); the distinction exists for diagnostics
/// and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// The lexer rejected the text.
    #[error("{0}")]
    Lexical(#[from] LexError),
    /// A computed token span cannot be sliced from the text.
    #[error("span {start}..{stop} out of range for text of {len} characters")]
    Span {
        start: usize,
        stop: usize,
        len: usize,
    },
}

/// Compute one offset-preserving sub-view per token of `normalized`.
///
/// Spans are derived from each token's column alone: `start = column - 1`,
/// `stop = start + len(text)`. Columns address a token's own line, so the
/// result is only meaningful for single-line inputs; tokens past the
/// first line are mapped as if their line started the text, matching the
/// pipeline this crate replaces. Fail-fast: the first error discards all
/// partial results.
///
/// # Errors
///
/// [`SplitError::Lexical`] when the text cannot be tokenized,
/// [`SplitError::Span`] when a computed span is not sliceable.
pub fn try_token_splits(
    normalized: &NormalizedString,
) -> Result<Vec<NormalizedString>, SplitError> {
    let tokens = lexer::tokenize(normalized.text())?;

    let mut pieces = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let start = token.span.column - 1;
        let stop = start + token.len_chars();
        let piece = normalized.slice(start, stop).ok_or(SplitError::Span {
            start,
            stop,
            len: normalized.len_chars(),
        })?;
        pieces.push(piece);
    }
    Ok(pieces)
}

/// [`try_token_splits`] with both failure classes collapsed to an empty
/// sequence.
///
/// Unlexable input and unsliceable spans are indistinguishable to the
/// caller: either way the host framework sees zero split points and the
/// downstream tokenizer falls back to the whole string.
#[must_use]
pub fn token_splits(normalized: &NormalizedString) -> Vec<NormalizedString> {
    try_token_splits(normalized).unwrap_or_default()
}

/// A text being pre-tokenized: an ordered list of offset-preserving
/// pieces, starting as one piece covering the whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreTokenizedString {
    splits: Vec<NormalizedString>,
}

impl PreTokenizedString {
    /// Start pre-tokenization with the whole text as a single piece.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            splits: vec![NormalizedString::new(text)],
        }
    }

    /// Replace each piece with the pieces `split_fn` returns for it.
    ///
    /// `split_fn` receives the piece's index and the piece itself. An
    /// empty return keeps the piece unsplit: a mapper that failed
    /// contributes zero split points rather than deleting text.
    pub fn split<F>(&mut self, mut split_fn: F)
    where
        F: FnMut(usize, &NormalizedString) -> Vec<NormalizedString>,
    {
        let mut next = Vec::with_capacity(self.splits.len());
        for (index, piece) in self.splits.iter().enumerate() {
            let pieces = split_fn(index, piece);
            if pieces.is_empty() {
                next.push(piece.clone());
            } else {
                next.extend(pieces);
            }
        }
        self.splits = next;
    }

    /// The current pieces, in order.
    #[must_use]
    pub fn splits(&self) -> &[NormalizedString] {
        &self.splits
    }
}

/// A pluggable stage that proposes hard split boundaries before the
/// sub-word algorithm runs.
pub trait PreTokenizer {
    fn pre_tokenize(&self, pretok: &mut PreTokenizedString);
}

/// Pre-tokenizer that splits at Java lexical boundaries.
///
/// ```
/// use javatok_rs::{JavaPreTokenizer, PreTokenizedString, PreTokenizer};
///
/// let mut pretok = PreTokenizedString::new("int x = 1;");
/// JavaPreTokenizer.pre_tokenize(&mut pretok);
///
/// let texts: Vec<_> = pretok.splits().iter().map(|s| s.text()).collect();
/// assert_eq!(texts, ["int", "x", "=", "1", ";"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaPreTokenizer;

impl PreTokenizer for JavaPreTokenizer {
    fn pre_tokenize(&self, pretok: &mut PreTokenizedString) {
        pretok.split(|_, normalized| token_splits(normalized));
    }
}
