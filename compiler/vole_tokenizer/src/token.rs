//! Token types for the Vole tokenizer.

use std::fmt;

/// Kind tag carried by every [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `// ...` to end of line.
    LineComment,
    /// `/* ... */`, possibly spanning lines.
    BlockComment,
    /// Quoted string (`"..."`, `'...'`, or `` `...` ``).
    String,
    ParenOpen,
    ParenClose,
    /// `${`
    FragmentOpen,
    /// `}`
    FragmentClose,
    /// `==`, `!=`, `>=`, `<=`
    ComparisonOperator,
    /// `=`, `:=`, `+=`, `-=`, `*=`, `/=`, `^=`, `&=`, `|=`, `<|=`
    AssignmentOperator,
    Dot,
    Comma,
    /// Directive marker `#`.
    Hash,
    /// Identifier-like word.
    Word,
    Integer,
    Float,
    /// Bytes the tokenizer does not recognize. Tokenization never fails;
    /// unrecognized input degrades to this kind.
    Unknown,
}

/// An atomic token, borrowing the source it was cut from.
///
/// `indent` is the run of horizontal whitespace consumed immediately
/// before the token on its line (empty when the token abuts the previous
/// one). `line` is 1-based; `offset` is the byte position of the token's
/// first byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub indent: &'src str,
    pub line: u32,
    pub offset: u32,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}:{}", self.kind, self.text, self.line, self.offset)
    }
}
