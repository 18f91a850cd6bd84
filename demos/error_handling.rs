//! Demonstrate how lexical failures surface -- and how the
//! pre-tokenizer deliberately swallows them.

use javatok_rs::{NormalizedString, split_str, tokenize, try_token_splits};

fn main() {
    // Unterminated string literal
    match tokenize("String s = \"unclosed;") {
        Ok(_) => println!("Lexed OK (unexpected)"),
        Err(e) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!(
                "  Location: line {}, column {}",
                e.span.line, e.span.column
            );
        }
    }

    println!();

    // The same input through the mapper: classified internally...
    let normalized = NormalizedString::new("String s = \"unclosed;");
    match try_token_splits(&normalized) {
        Ok(_) => println!("Mapped OK (unexpected)"),
        Err(e) => println!("Mapper error: {e}"),
    }

    // ...but collapsed to an empty split sequence at the boundary.
    let pieces = split_str("String s = \"unclosed;");
    println!("Public boundary returned {} pieces", pieces.len());
}
