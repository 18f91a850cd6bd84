//! CLI tool to inspect Java files the way the tokenizer pipeline sees them.

use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: javatok <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens  Print each token with its kind and position");
        eprintln!("  count   Print the token count per file (0 on lexical errors)");
        eprintln!("  splits  Print pre-tokenization pieces with original offsets");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  javatok tokens Main.java");
        eprintln!("  javatok count src/*.java");
        eprintln!("  javatok splits Main.java");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "tokens" => match javatok_rs::tokenize(&content) {
                Ok(tokens) => {
                    for token in tokens {
                        println!(
                            "{}:{}\t{:?}\t{}",
                            token.span.line, token.span.column, token.kind, token.text
                        );
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "count" => {
                println!("{path}: {}", javatok_rs::count_tokens(&content));
            }
            "splits" => {
                for piece in javatok_rs::split_str(&content) {
                    if let Some((start, stop)) = piece.original_span() {
                        println!("{start}..{stop}\t{}", piece.text());
                    }
                }
            }
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
