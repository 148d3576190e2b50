/// The builtin form table.
///
/// Declares every builtin form with its arity, and looks forms up by name.
pub mod core;

/// Builtin form implementations.
///
/// `if`, `<`, `+`, `-`, `begin` and `func`. Each receives its arguments
/// unevaluated and controls their evaluation itself.
pub mod builtin;

/// User-defined function calls.
///
/// Evaluates arguments, checks the argument count and runs the body in a
/// copy of the caller's environment.
pub mod closure;
