use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parsed, parse_expression},
    },
};

/// Parses a factor: an integer literal or a parenthesized expression.
///
/// There is no unary minus, so `-1` is rejected here. So are doubled
/// operators (`1++2`) and an operator followed by `)` (`(1+)`), since each
/// leaves this function looking at something other than a digit or `(`.
///
/// Grammar:
/// ```text
///     factor := integer_literal
///             | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
/// - `nesting`: Number of parentheses currently open.
///
/// # Returns
/// The parsed factor or a `ParseError` on failure.
///
/// # Errors
/// - `UnexpectedToken` if the next token is an operator or `)`.
/// - `UnexpectedEndOfInput` if there are no tokens left.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let Some(&(position, token)) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    if !token.starts_factor() {
        return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                 position });
    }

    if *token == Token::OpenParen {
        parse_grouping(tokens, position, nesting)
    } else {
        parse_integer_literal(tokens, position)
    }
}

/// Parses a maximal run of `IntDigit` tokens into one literal.
///
/// Digits are folded left to right with `value = value * 10 + digit`, so the
/// first digit is the most significant. The run ends at the first token that
/// is not a digit. The caller has already seen the first digit at `start`.
///
/// # Errors
/// `LiteralTooLarge` if the value does not fit in an `i64`.
fn parse_integer_literal<'a, I>(tokens: &mut Peekable<I>, start: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut value: i64 = 0;

    while let Some(&(_, &Token::IntDigit(digit))) = tokens.peek() {
        tokens.next();
        value = value.checked_mul(10)
                     .and_then(|v| v.checked_add(i64::from(digit)))
                     .ok_or(ParseError::LiteralTooLarge { position: start })?;
    }

    Ok(Parsed::literal(value, start))
}

/// Parses a parenthesized expression: `"(" expression ")"`.
///
/// The caller has already seen the `(` at `position`.
///
/// # Errors
/// - `NestingTooDeep` if this `(` would open more than
///   [`MAX_NESTING_DEPTH`] parentheses at once.
/// - `ExpectedClosingParen` if the inner expression is not followed by `)`,
///   including when the input ends first. The error carries the position of
///   the opening parenthesis.
/// - Propagates any errors from the inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         position: usize,
                         nesting: usize)
                         -> ParseResult<Parsed>
    where I: Iterator<Item = (usize, &'a Token)>
{
    if nesting >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    tokens.next();

    let inner = parse_expression(tokens, nesting + 1)?;
    match tokens.next() {
        Some((_, Token::CloseParen)) => Ok(inner),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}
