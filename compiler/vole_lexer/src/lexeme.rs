//! Lexeme: a semantically tagged unit built by merging one or more tokens.

use std::fmt;

use vole_tokenizer::Token;

/// Semantic tag of a [`Lexeme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    /// Unclassified fallback. The classifier never fails on structure;
    /// anything it cannot place becomes `Invalid`.
    Invalid,
    /// Line transition marker.
    Eol,
    Comment,
    /// `#` marker merged with its adjacent keyword.
    Directive,
    /// Bare or dotted identifier chain.
    Identifier,
    AssignmentOperator,
    /// Reserved tag with no emitting transition. Kept for parity with the
    /// mode set; see `Mode::Type`.
    Type,
    /// First word of a `name class` type definition header.
    Definition,
    /// Second word of a type definition header.
    DefinitionClass,
    /// Function header opening at the first byte of its line.
    FunctionDeclaration,
    /// Function header anywhere else: a call.
    Function,
    Argument,
    ArgumentType,
    ReturnIdentifier,
    ReturnType,
}

/// A classified span of source, built by merging one or more tokens.
///
/// `offset` and `line` are the minimum seen across merges (the first
/// merged token dominates under non-decreasing token order). `length`
/// accumulates `indent + text` byte counts of every merged token, so it
/// covers interior whitespace that `content` omits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub content: String,
    pub offset: u32,
    pub line: u32,
    pub length: u32,
}

impl Lexeme {
    /// A lexeme with no token payload (used for `Eol` markers).
    pub fn empty(kind: LexemeKind) -> Self {
        Self {
            kind,
            content: String::new(),
            offset: 0,
            line: 0,
            length: 0,
        }
    }

    /// Build a lexeme by merging `tokens` in order.
    pub fn from_tokens(kind: LexemeKind, tokens: &[&Token<'_>]) -> Self {
        let mut lexeme = Self {
            kind,
            content: String::new(),
            // Sentinels so the first merge dominates the min.
            offset: u32::MAX,
            line: u32::MAX,
            length: 0,
        };
        for token in tokens {
            lexeme.merge(token);
        }
        lexeme
    }

    /// Append a token: extend `content`, take the minimum position, and
    /// grow `length` by the token's indent and text.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token lengths are bounded by the u32 source size"
    )]
    pub fn merge(&mut self, token: &Token<'_>) {
        self.content.push_str(token.text);
        self.offset = self.offset.min(token.offset);
        self.line = self.line.min(token.line);
        self.length += (token.indent.len() + token.text.len()) as u32;
    }

    /// Change the tag in place. Used when later tokens reveal a lexeme's
    /// true role (a bare identifier turning out to be a call).
    pub fn retag(&mut self, kind: LexemeKind) {
        self.kind = kind;
    }
}

/// Debug rendering: one short bracket group per lexeme.
impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexemeKind::Eol => write!(f, "[/]"),
            LexemeKind::Comment => write!(f, "[c {}]", self.content),
            LexemeKind::Directive => write!(f, "[D {}]", self.content),
            LexemeKind::Identifier => write!(f, "[I {}]", self.content),
            LexemeKind::AssignmentOperator => write!(f, "[O {}]", self.content),
            LexemeKind::Type => write!(f, "[t {}]", self.content),
            LexemeKind::Definition => write!(f, "[T {}]", self.content),
            LexemeKind::DefinitionClass => write!(f, "[Tc {}]", self.content),
            LexemeKind::FunctionDeclaration => write!(f, "[F {}]", self.content),
            LexemeKind::Function => write!(f, "[f {}]", self.content),
            LexemeKind::Argument => write!(f, "[fa {}]", self.content),
            LexemeKind::ArgumentType => write!(f, "[Fat {}]", self.content),
            LexemeKind::ReturnIdentifier => write!(f, "[Fr {}]", self.content),
            LexemeKind::ReturnType => write!(f, "[Frt {}]", self.content),
            LexemeKind::Invalid => write!(f, "[X {}]", self.content),
        }
    }
}
