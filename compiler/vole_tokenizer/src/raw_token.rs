//! Raw token definition.
//!
//! The `RawToken` enum is the logos-derived tokenizer output before the
//! stream driver attaches indent, line, and offset metadata. Whitespace
//! and newlines appear here as ordinary variants so the driver can fold
//! them into the following token's indent and the line counter.

use logos::{Lexer, Logos};

use crate::token::TokenKind;

/// Raw token from logos (before stream assembly).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    /// Horizontal whitespace run. Captured (not skipped) so the driver
    /// can report it as the next token's indent.
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    /// `/* ... */`, possibly spanning lines. An unterminated comment
    /// runs to end of input.
    #[token("/*", block_comment)]
    BlockComment,

    /// Quoted string in any of the three quote styles, `\` escapes.
    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    #[regex(r"`(?:[^`\\\n]|\\.)*`")]
    String,

    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("${")]
    FragmentOpen,
    #[token("}")]
    FragmentClose,

    #[token("==")]
    #[token("!=")]
    #[token(">=")]
    #[token("<=")]
    ComparisonOperator,

    #[token("=")]
    #[token(":=")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("^=")]
    #[token("&=")]
    #[token("|=")]
    #[token("<|=")]
    AssignmentOperator,

    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("#")]
    Hash,

    /// Identifier-like word: letter or underscore, then letters, digits,
    /// underscores.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    #[regex(r"[0-9][0-9_]*")]
    Integer,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*")]
    Float,
}

impl RawToken {
    /// Map to the public [`TokenKind`].
    ///
    /// `Whitespace` and `Newline` never reach this point -- the driver
    /// folds them away before emitting tokens.
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            RawToken::Whitespace | RawToken::Newline => TokenKind::Unknown,
            RawToken::LineComment => TokenKind::LineComment,
            RawToken::BlockComment => TokenKind::BlockComment,
            RawToken::String => TokenKind::String,
            RawToken::ParenOpen => TokenKind::ParenOpen,
            RawToken::ParenClose => TokenKind::ParenClose,
            RawToken::FragmentOpen => TokenKind::FragmentOpen,
            RawToken::FragmentClose => TokenKind::FragmentClose,
            RawToken::ComparisonOperator => TokenKind::ComparisonOperator,
            RawToken::AssignmentOperator => TokenKind::AssignmentOperator,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Hash => TokenKind::Hash,
            RawToken::Word => TokenKind::Word,
            RawToken::Integer => TokenKind::Integer,
            RawToken::Float => TokenKind::Float,
        }
    }
}

/// Consume a block comment body up to and including the closing `*/`.
///
/// memchr-based search keeps this off the DFA: logos only matches the
/// opener, the callback bumps the lexer past the body.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> bool {
    match memchr::memmem::find(lex.remainder().as_bytes(), b"*/") {
        Some(end) => lex.bump(end + 2),
        // Unterminated: the comment swallows the rest of the input.
        None => lex.bump(lex.remainder().len()),
    }
    true
}
