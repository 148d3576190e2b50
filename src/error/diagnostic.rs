use std::fmt::Write as _;

use crate::{
    error::{LexError, ParseError, RuntimeError},
    interpreter::lexer::Location,
    util::text::source_line,
};

/// Any error the interpreter can raise, from any stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source could not be split into tokens.
    Lex(LexError),
    /// The tokens do not form a well-parenthesized program.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl Error {
    /// The source location this error points at.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Lex(e) => e.location(),
            Self::Parse(e) => e.location(),
            Self::Runtime(e) => e.location(),
        }
    }

    /// Renders the error against the source it came from.
    ///
    /// The report names the line, column and file, repeats the offending
    /// source line and puts a caret under the column. If the location lies
    /// outside the source (which only happens for the synthetic program
    /// wrapper on empty input), only the message line is produced.
    ///
    /// # Example
    /// ```
    /// use lispwalk::run;
    ///
    /// let source = "(begin\n  (frob 1))";
    /// let err = run(source).unwrap_err();
    ///
    /// assert_eq!(err.report(source, "demo.lisp"),
    ///            "Expected function, got frob [at line 2, column 4 in file demo.lisp]\n\
    ///             \x20 (frob 1))\n\
    ///             \x20  ^ near here\n");
    /// ```
    #[must_use]
    pub fn report(&self, source: &str, file_name: &str) -> String {
        let location = self.location();
        let mut out = String::new();

        let _ = writeln!(out,
                         "{self} [at line {}, column {} in file {file_name}]",
                         location.line, location.column);

        if let Some(line) = source_line(source, location.line) {
            let _ = writeln!(out, "{line}");
            let _ = writeln!(out, "{}^ near here", " ".repeat(location.column - 1));
        }

        out
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
