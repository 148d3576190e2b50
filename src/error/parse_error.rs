use crate::interpreter::lexer::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the syntax tree.
pub enum ParseError {
    /// A list was expected to start here, but the token is not `(`.
    ExpectedOpenParen {
        /// The token found instead.
        found:    String,
        /// Where the token is.
        location: Location,
    },
    /// The input ended while a list was still open.
    ExpectedClosingParen {
        /// The last token consumed before the input ran out.
        location: Location,
    },
    /// Tokens remain after the top-level forms were parsed.
    IncompleteParse {
        /// The first token that was not consumed.
        token:    String,
        /// Where the token is.
        location: Location,
    },
}

impl ParseError {
    /// The location reported with this error.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::ExpectedOpenParen { location, .. }
            | Self::ExpectedClosingParen { location }
            | Self::IncompleteParse { location, .. } => *location,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedOpenParen { found, .. } => {
                write!(f, "Expected open parenthesis, got '{found}'")
            },
            Self::ExpectedClosingParen { .. } => write!(f, "Expected closing parenthesis"),
            Self::IncompleteParse { token, .. } => {
                write!(f, "Incomplete parse, unexpected '{token}'")
            },
        }
    }
}

impl std::error::Error for ParseError {}
