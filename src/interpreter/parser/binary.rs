use std::iter::Peekable;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parsed},
            factor::parse_factor,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `nesting`: Number of parentheses currently open.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut left = parse_multiplicative(tokens, nesting)?;
    loop {
        if let Some(&(position, token)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && !op.is_multiplicative()
        {
            tokens.next();
            let right = parse_multiplicative(tokens, nesting)?;
            left = Parsed::binary(left, op, right, position)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
///
/// A factor directly followed by another factor, as in `2(3)`, is not an
/// implicit multiplication. The loop stops and leaves the second factor for
/// the caller, which reports it as trailing input.
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `nesting`: Number of parentheses currently open.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   nesting: usize)
                                   -> ParseResult<Parsed>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut left = parse_factor(tokens, nesting)?;
    while let Some(&(position, token)) = tokens.peek() {
        if let Some(op) = token_to_binary_operator(token)
           && op.is_multiplicative()
        {
            tokens.next();
            let right = parse_factor(tokens, nesting)?;
            left = Parsed::binary(left, op, right, position)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for `+`, `-`, `*` and `/`, and `None` for
/// digits and parentheses.
///
/// # Example
/// ```
/// use calcfront::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::IntDigit(1)), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Mul => Some(BinaryOperator::Mul),
        Token::Div => Some(BinaryOperator::Div),
        Token::OpenParen | Token::CloseParen | Token::IntDigit(_) => None,
    }
}
