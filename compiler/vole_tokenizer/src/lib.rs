//! Tokenizer for Vole source files.
//!
//! Splits raw source text into atomic [`Token`]s carrying a kind tag, the
//! raw text, the horizontal whitespace consumed before the token, a
//! 1-based line number, and a byte offset. The classifier in `vole_lexer`
//! consumes the resulting [`TokenStream`].
//!
//! Tokenization is infallible: bytes that match no rule become
//! [`TokenKind::Unknown`] tokens rather than errors.

use logos::Logos;

mod raw_token;
mod stream;
mod token;

pub use stream::TokenStream;
pub use token::{Token, TokenKind};

use raw_token::RawToken;

/// Tokenize one source file.
///
/// Drives the logos scanner over `source`, folding whitespace runs into
/// the following token's `indent` and newline tokens into the line
/// counter. Multi-line tokens (block comments) advance the line counter
/// by their interior newline count.
pub fn tokenize(source: &str) -> TokenStream<'_> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();
    let mut line: u32 = 1;
    let mut pending_indent: &str = "";

    while let Some(result) = lexer.next() {
        let text = lexer.slice();

        match result {
            Ok(RawToken::Whitespace) => {
                pending_indent = text;
                continue;
            }
            Ok(RawToken::Newline) => {
                line += 1;
                pending_indent = "";
                continue;
            }
            _ => {}
        }

        let kind = match result {
            Ok(raw) => raw.kind(),
            // Unrecognized bytes degrade to Unknown; never an error.
            Err(()) => TokenKind::Unknown,
        };

        tokens.push(Token {
            kind,
            text,
            indent: std::mem::take(&mut pending_indent),
            line,
            offset: saturating_u32(lexer.span().start),
        });

        line += newline_count(text);
    }

    TokenStream::new(tokens)
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Number of `\n` bytes in `text` (SIMD search via memchr).
fn newline_count(text: &str) -> u32 {
    saturating_u32(memchr::memchr_iter(b'\n', text.as_bytes()).count())
}
