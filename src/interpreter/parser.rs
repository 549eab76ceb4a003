/// Entry points and shared parser types.
///
/// Contains the top-level parse functions, the end-of-input check, and the
/// `ParseResult` alias.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: `+ -` and `* /`.
pub mod binary;

/// Factor parsing.
///
/// Handles the tightest-binding units: multi-digit integer literals and
/// parenthesized sub-expressions.
pub mod factor;
