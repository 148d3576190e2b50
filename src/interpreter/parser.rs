/// Core list parsing.
///
/// Contains the recursive-descent routine that turns one parenthesized
/// group of tokens into a list node.
pub mod core;

/// Whole-program parsing.
///
/// Parses every top-level form and wraps them in a synthetic `begin` list.
pub mod program;
