//! # lispwalk
//!
//! lispwalk is a tree-walking interpreter for a small parenthesized
//! expression language. Source text is split into tokens, the tokens are
//! matched into a tree of lists and atoms, and the tree is evaluated
//! directly.
//!
//! ```text
//! (func fib (n)
//!   (if (< n 2)
//!       n
//!       (+ (fib (- n 1)) (fib (- n 2)))))
//! (fib 10)
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use log::info;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context, lexer::lex, parser::program::parse_program, value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum: a node is either an atom holding
/// one token or a list of nodes. The tree is built by the parser and
/// traversed by the evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every error carries the source location it refers to. The crate-level
/// `Error` can render itself against the source text with a caret under
/// the offending column.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides the staged entry points used by [`run`].
pub mod interpreter;
/// General helpers that are not specific to a single phase.
pub mod util;

/// Lexes, parses and evaluates a whole program.
///
/// The program is a sequence of top-level forms. They are evaluated in
/// order in a fresh environment and the value of the last one is returned.
/// An empty program produces `None`.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error encountered.
///
/// # Examples
/// ```
/// use lispwalk::{interpreter::value::core::Value, run};
///
/// assert_eq!(run("(+ 1 2)").unwrap(), Some(Value::Integer(3)));
/// assert_eq!(run("(func add (a b) (+ a b)) (add 3 4)").unwrap(),
///            Some(Value::Integer(7)));
///
/// // Calling a function that was never defined.
/// assert!(run("(frob 1)").is_err());
/// ```
pub fn run(source: &str) -> Result<Option<Value>, Error> {
    let tokens = lex(source)?;
    info!("lexed {} tokens", tokens.len());

    let program = parse_program(&tokens)?;

    let mut context = Context::new();
    let value = context.eval_program(&program)?;
    info!("evaluation finished");

    Ok(value)
}
