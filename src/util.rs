/// Source text helpers.
///
/// Small routines for looking up lines of the source text when
/// rendering diagnostics.
pub mod text;
