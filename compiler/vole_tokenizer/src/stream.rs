//! Forward-only cursor over a tokenized source.

use crate::token::Token;

/// Cursor over the tokens of one source file.
///
/// Offers current-token access, one-token lookahead, and forward
/// advancement. The underlying storage is released on drop; there is no
/// explicit close.
#[derive(Debug)]
pub struct TokenStream<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> TokenStream<'src> {
    pub(crate) fn new(tokens: Vec<Token<'src>>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The token under the cursor, or `None` once the stream is exhausted.
    #[inline]
    pub fn current(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos)
    }

    /// One token of lookahead past the cursor.
    #[inline]
    pub fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos + 1)
    }

    /// Move the cursor forward by one token. Saturates at end of stream.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Whether the cursor still points at a token.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Total number of tokens in the stream, independent of the cursor.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens, for inspection and tests.
    #[inline]
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }
}
