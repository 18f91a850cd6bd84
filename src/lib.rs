//! Java lexer and pre-tokenizer for sub-word tokenization pipelines.
//!
//! Lexes Java source into tokens with line/column positions, and maps
//! those tokens to character spans so a sub-word tokenizer (`WordPiece`
//! and friends) can split at exactly the language's lexical boundaries
//! while keeping enough offset metadata to reconstruct the original
//! file.
//!
//! # Quick start
//!
//! ## Lex a snippet
//!
//! ```
//! use javatok_rs::{TokenKind, tokenize};
//!
//! let tokens = tokenize("int x = 1;").unwrap();
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[1].text, "x");
//! assert_eq!(tokens[1].span.column, 5);
//! ```
//!
//! ## Split at lexical boundaries
//!
//! ```
//! use javatok_rs::{JavaPreTokenizer, PreTokenizedString, PreTokenizer};
//!
//! let mut pretok = PreTokenizedString::new("int x = 1;");
//! JavaPreTokenizer.pre_tokenize(&mut pretok);
//!
//! let spans: Vec<_> = pretok
//!     .splits()
//!     .iter()
//!     .filter_map(|piece| piece.original_span())
//!     .collect();
//! assert_eq!(spans, [(0, 3), (4, 5), (6, 7), (8, 9), (9, 10)]);
//! ```
//!
//! Malformed input never surfaces an error through the pre-tokenizer:
//! the mapper contributes zero split points and the text passes through
//! whole. Use [`tokenize`] or [`try_token_splits`] directly when you
//! need the failure.

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod lexer;
pub mod normalized;
pub mod pretokenizer;
pub mod token;

pub use lexer::{LexError, LexErrorKind, count_tokens, tokenize};
pub use normalized::NormalizedString;
pub use pretokenizer::{
    JavaPreTokenizer, PreTokenizedString, PreTokenizer, SplitError, token_splits, try_token_splits,
};
pub use token::{Span, Token, TokenKind};

/// Split a source string at Java lexical boundaries in one step.
///
/// Returns one offset-preserving piece per token, or an empty vector
/// when the input cannot be mapped.
#[must_use]
pub fn split_str(input: &str) -> Vec<NormalizedString> {
    token_splits(&NormalizedString::new(input))
}
