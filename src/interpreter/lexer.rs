use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token.
///
/// Whitespace is consumed by the lexer and never produces a kind of its own.
/// Integers are tried before identifiers, and an identifier can never start
/// with a digit, so `12a` lexes as the integer `12` followed by the
/// identifier `a`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A run of ASCII digits such as `42`. The text is kept as written and
    /// converted to a number during evaluation.
    #[regex(r"[0-9]+")]
    Integer,
    /// Any other run of characters up to whitespace or `)`, such as `add`,
    /// `+` or `<`. An opening parenthesis does not end the run, so
    /// `foo(bar` is a single identifier.
    #[regex(r"[^\s()0-9][^\s)]*", allow_greedy = true)]
    Identifier,
    /// Whitespace. Newlines are counted for source locations.
    #[regex(r"\s+", |lex| {
        let slice = lex.slice();
        if let Some(last) = slice.rfind('\n') {
            lex.extras.line += slice.matches('\n').count();
            lex.extras.line_start = lex.span().start + last + 1;
        }
        logos::Skip
    })]
    Whitespace,
}

impl TokenKind {
    /// Whether this is one of the two parenthesis tokens.
    #[must_use]
    pub const fn is_syntax(self) -> bool {
        matches!(self, Self::LParen | Self::RParen)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LParen | Self::RParen => write!(f, "syntax"),
            Self::Integer => write!(f, "integer"),
            Self::Identifier => write!(f, "identifier"),
            Self::Whitespace => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so that
/// every token can be given a line and column.
pub struct LexerExtras {
    /// The current line number, starting at 1.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A 1-based line and column in the source text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Location {
    /// Creates a location from a line and column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of lexeme this is.
    pub kind:     TokenKind,
    /// The exact text of the lexeme.
    pub text:     String,
    /// Byte offset of the lexeme in the source.
    pub position: usize,
    /// Line and column of the first character of the lexeme.
    pub location: Location,
}

impl Token {
    /// Creates an identifier token that does not come from any source text.
    ///
    /// Used for the `begin` that wraps a whole program.
    #[must_use]
    pub fn synthetic(text: &str) -> Self {
        Self { kind:     TokenKind::Identifier,
               text:     text.to_string(),
               position: 0,
               location: Location::new(1, 1), }
    }

    /// Whether this token is the opening parenthesis.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.kind == TokenKind::LParen
    }

    /// Whether this token is the closing parenthesis.
    #[must_use]
    pub fn is_close(&self) -> bool {
        self.kind == TokenKind::RParen
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{}:{} {} {}",
               self.location.line, self.location.column, self.kind, self.text)
    }
}

/// Splits source text into tokens.
///
/// Tokens come out in source order and never overlap. Whitespace is skipped.
///
/// # Errors
/// Returns a [`LexError`] if some input cannot be classified.
///
/// # Example
/// ```
/// use lispwalk::interpreter::lexer::{TokenKind, lex};
///
/// let tokens = lex("(+ 13 2)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::LParen,
///                 TokenKind::Identifier,
///                 TokenKind::Integer,
///                 TokenKind::Integer,
///                 TokenKind::RParen]);
/// assert_eq!(tokens[2].text, "13");
/// assert_eq!(tokens[2].position, 3);
/// ```
pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let location = locate(source, &lexer.extras, span.start);

        let Ok(kind) = kind else {
            return Err(LexError::Unrecognized { text: lexer.slice().to_string(),
                                                location });
        };

        tokens.push(Token { kind,
                            text: lexer.slice().to_string(),
                            position: span.start,
                            location });
    }

    Ok(tokens)
}

/// Computes the location of a byte offset on the lexer's current line.
fn locate(source: &str, extras: &LexerExtras, offset: usize) -> Location {
    let column = source[extras.line_start..offset].chars().count() + 1;
    Location::new(extras.line, column)
}
