/// The evaluator module walks the syntax tree and computes results.
///
/// The evaluator resolves identifiers against an environment, runs the
/// builtin forms and calls user-defined functions. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates atoms and applications.
/// - Creates closures and binds them with `func`.
/// - Reports runtime errors such as type mismatches and wrong argument
///   counts.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// parentheses, integers and identifiers, each with its source location.
/// This is the first stage of interpretation.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser matches parentheses and turns each pair into a list node.
/// Everything else becomes an atom.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, booleans and user-defined functions.
pub mod value;
