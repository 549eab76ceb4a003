/// Parsing errors.
///
/// Defines every way a token sequence can be rejected: a missing operand, an
/// unbalanced parenthesis, leftover input after a complete expression, or a
/// literal too large to represent.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed tree, such as division
/// by zero or arithmetic overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
