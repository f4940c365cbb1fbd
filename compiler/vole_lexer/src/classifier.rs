//! Modal lexeme classifier.
//!
//! Re-tags a linear token stream into richer semantic categories without
//! building a tree. A single forward pass with one token of lookahead,
//! driven by three pieces of state:
//!
//! - `mode`: the current interpretive context (argument list, return
//!   specification, dotted identifier chain, ...), reset on every line
//!   change;
//! - `depth`: the count of open, unmatched call-argument parenthesis
//!   lists (declaration parameter lists do not count);
//! - `is_declaration`: whether the most recent function header opened at
//!   the first byte of its line.
//!
//! The classifier is advisory, never a validator: token sequences it
//! cannot place degrade to [`LexemeKind::Invalid`] lexemes, and a `#`
//! marker without an adjacent keyword is dropped outright. It has no
//! error path at all.

use vole_tokenizer::{Token, TokenKind, TokenStream};

use crate::lexeme::{Lexeme, LexemeKind};

/// Interpretive context governing how the next token is classified.
///
/// Resets to `None` on every line change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    None,
    /// Reserved: no transition enters this state yet.
    #[allow(dead_code, reason = "reserved mode, no transition enters it yet")]
    Assignment,
    /// Extending a dotted identifier chain.
    Identifier,
    /// Inside a parenthesized argument or parameter list.
    Arguments,
    /// Reserved: no transition enters this state yet.
    #[allow(dead_code, reason = "reserved mode, no transition enters it yet")]
    Type,
    /// After a declaration's parameter list, reading its return
    /// specification.
    Returns,
}

/// Classify the entire stream into an ordered lexeme sequence.
///
/// Consumes every token; never fails. Each call owns fresh state, so
/// concurrent classification of different streams is safe.
pub fn classify(stream: &mut TokenStream<'_>) -> Vec<Lexeme> {
    let mut lexemes: Vec<Lexeme> = Vec::new();
    let mut mode = Mode::None;
    let mut depth: u32 = 0;
    let mut is_declaration = false;
    let mut last_line: Option<u32> = None;
    let mut line_start: u32 = 0;

    while let Some(cur) = stream.current().copied() {
        let next = stream.peek().copied();

        // Line change: emit an Eol marker, forget the mode, and remember
        // where the new line starts (the declaration test needs it).
        // Never fires for the first line; no trailing Eol is forced.
        if last_line.is_some_and(|line| cur.line > line) {
            lexemes.push(Lexeme::empty(LexemeKind::Eol));
            mode = Mode::None;
            line_start = cur.offset;
        }
        last_line = Some(cur.line);

        match cur.kind {
            TokenKind::LineComment | TokenKind::BlockComment => {
                lexemes.push(Lexeme::from_tokens(LexemeKind::Comment, &[&cur]));
            }

            TokenKind::Hash => {
                // Only a keyword immediately adjacent on the same line
                // turns the marker into a directive. A bare marker
                // produces nothing.
                if let Some(next) = next {
                    if next.line == cur.line
                        && next.kind == TokenKind::Word
                        && next.indent.is_empty()
                    {
                        lexemes.push(Lexeme::from_tokens(LexemeKind::Directive, &[&cur, &next]));
                        stream.advance();
                    }
                }
            }

            TokenKind::Word => match next.filter(|n| n.line == cur.line) {
                Some(next) => {
                    classify_word(&mut lexemes, &mut mode, &mut depth, &mut is_declaration,
                        line_start, stream, &cur, &next);
                }
                None => {
                    // Last token of its line (or of the stream).
                    if mode == Mode::Returns {
                        lexemes.push(Lexeme::from_tokens(LexemeKind::ReturnType, &[&cur]));
                    } else if !extend_identifier_chain(&mut lexemes, mode, &cur) {
                        lexemes.push(Lexeme::from_tokens(LexemeKind::Invalid, &[&cur]));
                    }
                }
            },

            TokenKind::ParenClose => {
                if mode == Mode::Arguments {
                    if is_declaration {
                        // The parameter list just closed; a same-line
                        // keyword or parenthesis means returns follow.
                        let returns_follow = next.is_some_and(|n| {
                            n.line == cur.line
                                && matches!(n.kind, TokenKind::Word | TokenKind::ParenOpen)
                        });
                        mode = if returns_follow { Mode::Returns } else { Mode::None };
                    } else {
                        depth = depth.saturating_sub(1);
                        // Nested calls stay in Arguments until the
                        // outermost list closes.
                        if depth == 0 {
                            mode = Mode::None;
                            is_declaration = false;
                        }
                    }
                } else {
                    lexemes.push(Lexeme::from_tokens(LexemeKind::Invalid, &[&cur]));
                }
            }

            _ => {
                if mode == Mode::Arguments {
                    // Commas are argument separators; everything else in
                    // an argument list is an argument.
                    if cur.kind != TokenKind::Comma {
                        lexemes.push(Lexeme::from_tokens(LexemeKind::Argument, &[&cur]));
                    }
                } else {
                    lexemes.push(Lexeme::from_tokens(LexemeKind::Invalid, &[&cur]));
                }
            }
        }

        stream.advance();
    }

    lexemes
}

/// Dispatch for a word token with a same-line lookahead.
#[allow(clippy::too_many_arguments, reason = "classifier state is deliberately local to classify()")]
fn classify_word(
    lexemes: &mut Vec<Lexeme>,
    mode: &mut Mode,
    depth: &mut u32,
    is_declaration: &mut bool,
    line_start: u32,
    stream: &mut TokenStream<'_>,
    cur: &Token<'_>,
    next: &Token<'_>,
) {
    if next.kind == TokenKind::AssignmentOperator {
        // Assignment target: close out the identifier chain (or start a
        // fresh one) and emit the operator.
        if !extend_identifier_chain(lexemes, *mode, cur) {
            lexemes.push(Lexeme::from_tokens(LexemeKind::Identifier, &[cur]));
        }
        lexemes.push(Lexeme::from_tokens(LexemeKind::AssignmentOperator, &[next]));
        stream.advance();
    } else if next.kind == TokenKind::Dot && next.indent.is_empty() {
        // Dotted chain: extend the pending identifier or start one
        // spanning both tokens.
        if let Some(prev) = pending_identifier(lexemes, *mode) {
            prev.merge(cur);
            prev.merge(next);
        } else {
            lexemes.push(Lexeme::from_tokens(LexemeKind::Identifier, &[cur, next]));
        }
        *mode = Mode::Identifier;
        stream.advance();
    } else if next.kind == TokenKind::ParenOpen && next.indent.is_empty() {
        // Function header. A pending identifier with no gap means this is
        // a call continuing a dotted chain: fold in and retag.
        let prev_is_identifier =
            lexemes.last().map(|l| l.kind) == Some(LexemeKind::Identifier);
        if prev_is_identifier && cur.indent.is_empty() {
            if let Some(prev) = lexemes.last_mut() {
                prev.merge(cur);
                prev.merge(next);
                prev.retag(LexemeKind::Function);
            }
            *depth += 1;
        } else if cur.offset == line_start {
            // First byte of the line: a declaration. Parameter lists do
            // not participate in call depth.
            lexemes.push(Lexeme::from_tokens(LexemeKind::FunctionDeclaration, &[cur, next]));
            *is_declaration = true;
        } else {
            lexemes.push(Lexeme::from_tokens(LexemeKind::Function, &[cur, next]));
            *is_declaration = false;
            *depth += 1;
        }
        *mode = Mode::Arguments;
        stream.advance();
    } else if *mode == Mode::Arguments {
        lexemes.push(Lexeme::from_tokens(LexemeKind::Argument, &[cur]));
        if next.kind == TokenKind::Word {
            // `name type` parameter pair.
            lexemes.push(Lexeme::from_tokens(LexemeKind::ArgumentType, &[next]));
            stream.advance();
        } else if next.kind == TokenKind::Comma {
            stream.advance();
        }
    } else if *mode == Mode::Returns {
        if matches!(next.kind, TokenKind::Comma | TokenKind::ParenClose) {
            // A type standing alone in the return list.
            lexemes.push(Lexeme::from_tokens(LexemeKind::ReturnType, &[cur]));
            if next.kind == TokenKind::Comma {
                stream.advance();
            }
        } else {
            // Named return; its type arrives as a later word.
            lexemes.push(Lexeme::from_tokens(LexemeKind::ReturnIdentifier, &[cur]));
        }
    } else if extend_identifier_chain(lexemes, *mode, cur) {
        // Tail word of a dotted chain (`a.b.c` before something that is
        // not a dot).
    } else if next.kind == TokenKind::Word {
        // `name class` type definition header.
        lexemes.push(Lexeme::from_tokens(LexemeKind::Definition, &[cur]));
        lexemes.push(Lexeme::from_tokens(LexemeKind::DefinitionClass, &[next]));
        stream.advance();
    } else {
        lexemes.push(Lexeme::from_tokens(LexemeKind::Invalid, &[cur]));
    }
}

/// The newest lexeme, when the classifier is mid-chain and that lexeme is
/// an identifier it may keep extending.
fn pending_identifier(lexemes: &mut [Lexeme], mode: Mode) -> Option<&mut Lexeme> {
    if mode != Mode::Identifier {
        return None;
    }
    lexemes
        .last_mut()
        .filter(|lexeme| lexeme.kind == LexemeKind::Identifier)
}

/// Merge `token` into the pending identifier chain, if there is one and
/// the token abuts it (no gap). Returns whether the merge happened.
/// Spaced words fall through to the definition and fallback branches.
fn extend_identifier_chain(lexemes: &mut [Lexeme], mode: Mode, token: &Token<'_>) -> bool {
    if !token.indent.is_empty() {
        return false;
    }
    if let Some(prev) = pending_identifier(lexemes, mode) {
        prev.merge(token);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests;
