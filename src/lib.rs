//! # calcfront
//!
//! calcfront is a small front end for integer arithmetic expressions written
//! in Rust. It tokenizes dense, whitespace-free strings of digits, the four
//! arithmetic operators, and parentheses, then parses and evaluates them with
//! precedence-climbing recursive descent.
//!
//! The pipeline has two stages:
//!
//! ```
//! use calcfront::{lex, parse};
//!
//! let tokens = lex("2*(7+1)");
//! assert_eq!(parse(&tokens).unwrap(), 16);
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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an arithmetic expression as a tree. The tree is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines literal and binary-operation nodes.
/// - Attaches token positions to nodes for error reporting.
/// - Renders trees as prefix s-expressions.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines `ParseError` for every way a token sequence is rejected.
/// - Defines `RuntimeError` for evaluation failures.
/// - Implements `Display` and `std::error::Error` for both.
pub mod error;
/// Ties together lexing, parsing, and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, and evaluator.
/// - Provides entry points for tokenizing, parsing, and evaluating input.
pub mod interpreter;

pub use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        lexer::{Token, TokenKind, TokenSequence, lex},
        parser::core::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH, parse, parse_tree},
    },
};

/// Tokenizes, parses, and evaluates `source` in one call.
///
/// This is `parse(&lex(source))`.
///
/// # Errors
/// Returns a `ParseError` if the input is not a valid expression or cannot be
/// evaluated.
///
/// # Examples
/// ```
/// use calcfront::get_result;
///
/// assert_eq!(get_result("21/7+5").unwrap(), 8);
///
/// // Adjacent factors are not multiplied.
/// assert!(get_result("1232((9))").is_err());
/// ```
pub fn get_result(source: &str) -> Result<i64, ParseError> {
    parse(&lex(source))
}
