use crate::interpreter::lexer::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found input that no token rule accepts.
    Unrecognized {
        /// The offending text.
        text:     String,
        /// Where the text starts.
        location: Location,
    },
}

impl LexError {
    /// The location of the offending input.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Unrecognized { location, .. } => *location,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized { text, .. } => write!(f, "Could not lex '{text}'"),
        }
    }
}

impl std::error::Error for LexError {}
