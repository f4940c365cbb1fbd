//! Vole CLI.
//!
//! `vole <file>` -- load one source file, report its detected
//! indentation, and dump the classified lexeme sequence for inspection.

use std::path::{Path, PathBuf};
use std::process;

use tracing::info;
use vole_lexer::{classify, detect};
use vole_tokenizer::tokenize;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("vole");

    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        eprintln!("incorrect usage, expected: vole [file]");
        process::exit(1);
    };

    let path = resolve_path(&arg);
    let source = read_file(&path);

    let indentation = detect(&source);
    info!("detected indentation of {indentation}");

    let mut stream = tokenize(&source);
    let lexemes = classify(&mut stream);

    print!("Lexer Output: START ");
    for lexeme in &lexemes {
        print!("{lexeme}");
    }
    println!(" END");
}

/// Absolutize the argument and default the extension to `.vole`.
fn resolve_path(arg: &str) -> PathBuf {
    match std::path::absolute(arg) {
        Ok(path) => normalize_extension(path),
        Err(e) => {
            eprintln!("cannot resolve path '{arg}': {e}");
            process::exit(1);
        }
    }
}

fn normalize_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension("vole");
    }
    path
}

/// Read a file from disk, exiting with a user-friendly error message on
/// failure.
fn read_file(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("cannot find file '{}'", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{}'", path.display())
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{}' contains invalid UTF-8 data", path.display())
                }
                _ => format!("error reading '{}': {e}", path.display()),
            };
            eprintln!("{msg}");
            process::exit(1);
        }
    }
}
