/// Source location of a token's first character.
///
/// Both fields are 1-based; `column` counts characters within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Reserved word (`class`, `int`, `public`, ...).
    Keyword,
    /// Identifier.
    Identifier,
    /// Integer literal (decimal, hex, octal, or binary).
    Integer,
    /// Floating-point literal.
    FloatingPoint,
    /// Character literal (`'a'`).
    Character,
    /// String literal (`"..."`).
    Str,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
    /// Operator (`+`, `==`, `>>>=`, `->`, ...).
    Operator,
    /// Separator (`(`, `)`, `{`, `}`, `[`, `]`, `;`, `,`, `.`, `...`).
    Separator,
    /// Annotation marker `@`.
    Annotation,
}

/// A single token with its kind, verbatim source text, and location.
///
/// `text` is the literal slice of the source, so string and character
/// literals keep their quotes and escape sequences. Together with
/// `span.column` this addresses the token's character range on its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Character length of the token's literal text.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}
