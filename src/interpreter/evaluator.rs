/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine: atoms, applications and the root
/// context that top-level forms run in.
pub mod core;

/// The environment that maps names to values.
///
/// Environments are flat and copied on every function call.
pub mod environment;

/// Builtin forms and user-defined function calls.
pub mod function;

/// Utility functions for evaluation.
///
/// Helpers that evaluate a subexpression and check the type of its result.
pub mod utils;
