/// Runtime values and closures.
///
/// Defines the `Value` enum produced by evaluation and the `Closure` type
/// created by `func`.
pub mod core;
