/// Lexing errors.
///
/// Raised when a run of source characters cannot be classified as any kind
/// of token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors that can occur while turning tokens into the syntax
/// tree: a missing opening parenthesis, a list left open at the end of the
/// input, and tokens left over after the program.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, unknown names, wrong argument counts, malformed function
/// definitions, bad integer literals and arithmetic overflow.
pub mod runtime_error;
/// The crate-level error and its source-annotated report.
///
/// Wraps the errors of every stage in one type so the driver can render a
/// diagnostic with the offending line and a caret under the column.
pub mod diagnostic;

pub use diagnostic::Error;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
