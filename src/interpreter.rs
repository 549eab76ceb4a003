/// The evaluator module computes the value of a parsed tree.
///
/// # Responsibilities
/// - Walks `Expr` nodes left to right and applies integer arithmetic.
/// - Reports division by zero and overflow as `RuntimeError`s.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads raw text and emits one token per recognized character:
/// digits, the four operators, and parentheses. It never fails; anything else
/// is skipped.
///
/// # Responsibilities
/// - Converts the input character stream into a `TokenSequence`.
/// - Keeps digits separate so the parser can decide where literals end.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence with precedence-climbing recursive
/// descent, merges digit runs into literals, and rejects any structural
/// violation.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Enforces operand placement, parenthesis balance, and end of input.
pub mod parser;
