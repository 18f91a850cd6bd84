//! Split a Java snippet at lexical boundaries and show the offsets a
//! sub-word tokenizer would receive.

use javatok_rs::{JavaPreTokenizer, PreTokenizedString, PreTokenizer};

fn main() {
    let source = "int total = counts.get(key) + 1;";

    let mut pretok = PreTokenizedString::new(source);
    JavaPreTokenizer.pre_tokenize(&mut pretok);

    println!("source: {source}");
    println!();
    for piece in pretok.splits() {
        if let Some((start, stop)) = piece.original_span() {
            println!("{start:>3}..{stop:<3} {}", piece.text());
        }
    }
}
