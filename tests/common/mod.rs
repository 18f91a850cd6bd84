#![allow(dead_code)]

use javatok_rs::{NormalizedString, split_str};

/// Helper: split a source string and return the piece texts in order.
pub fn split_texts(input: &str) -> Vec<String> {
    split_str(input)
        .iter()
        .map(|piece| piece.text().to_string())
        .collect()
}

/// Helper: assert every piece's original span extracts its own text.
///
/// This is the lossless-reconstruction guarantee: a downstream consumer
/// holding only the spans must be able to recover each piece from the
/// raw input.
pub fn assert_spans_extract(input: &str) {
    let chars: Vec<char> = input.chars().collect();
    for piece in split_str(input) {
        let (start, stop) = piece
            .original_span()
            .expect("non-empty piece must map to the original");
        let extracted: String = chars[start..stop].iter().collect();
        assert_eq!(
            extracted,
            piece.text(),
            "span {start}..{stop} does not extract the piece text\n\
             --- input ---\n{input}"
        );
    }
}

/// Helper: the spans of every piece, in order.
pub fn split_spans(input: &str) -> Vec<(usize, usize)> {
    split_str(input)
        .iter()
        .map(|piece| {
            piece
                .original_span()
                .expect("non-empty piece must map to the original")
        })
        .collect()
}

/// Helper: a normalized string over `input`, for direct mapper calls.
pub fn normalized(input: &str) -> NormalizedString {
    NormalizedString::new(input)
}
