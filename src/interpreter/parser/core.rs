use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{evaluator::evaluate, lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of parentheses open at once.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Maximum depth of a parsed tree, counting literals as depth 1.
pub const MAX_TREE_DEPTH: usize = 1024;

/// A parsed expression together with the depth of its tree.
#[derive(Debug)]
pub struct Parsed {
    /// The expression tree.
    pub expr:  Expr,
    /// Depth of `expr`, as returned by [`Expr::depth`].
    pub depth: usize,
}

impl Parsed {
    /// Wraps a literal, which always has depth 1.
    pub(crate) const fn literal(value: i64, position: usize) -> Self {
        Self { expr:  Expr::Literal { value, position },
               depth: 1, }
    }

    /// Combines two operands under `op`.
    ///
    /// # Errors
    /// Returns `ExpressionTooDeep` if the new node would exceed
    /// [`MAX_TREE_DEPTH`].
    pub(crate) fn binary(left: Self,
                         op: BinaryOperator,
                         right: Self,
                         position: usize)
                         -> ParseResult<Self> {
        let depth = 1 + left.depth.max(right.depth);
        if depth > MAX_TREE_DEPTH {
            return Err(ParseError::ExpressionTooDeep { position });
        }
        log::trace!("reduced '{op}' at token {position}");
        Ok(Self { expr: Expr::BinaryOp { left: Box::new(left.expr),
                                         op,
                                         right: Box::new(right.expr),
                                         position },
                  depth })
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through the precedence hierarchy. It does not check for leftover
/// input; see [`parse_tree`].
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(position, token)` pairs.
/// - `nesting`: Number of parentheses currently open.
///
/// # Returns
/// The parsed expression and its depth.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = (usize, &'a Token)>
{
    parse_additive(tokens, nesting)
}

/// Parses a complete token sequence into an expression tree.
///
/// After the top-level expression is parsed the cursor must be at the end of
/// the sequence. Anything left over, such as `(9)` in `1232(9)` or a stray
/// `)`, is rejected rather than ignored.
///
/// Parentheses may nest at most [`MAX_NESTING_DEPTH`] deep and the tree may be
/// at most [`MAX_TREE_DEPTH`] deep. Both limits keep every walk over the tree
/// within a bounded stack.
///
/// # Errors
/// Returns the first `ParseError` encountered. No partial tree is returned.
///
/// # Example
/// ```
/// use calcfront::interpreter::{lexer::lex, parser::core::parse_tree};
///
/// let tree = parse_tree(&lex("1+2*3")).unwrap();
/// assert_eq!(tree.to_string(), "(+ 1 (* 2 3))");
///
/// assert!(parse_tree(&lex("1232((9))")).is_err());
/// ```
pub fn parse_tree(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().enumerate().peekable();

    let Parsed { expr, depth } = parse_expression(&mut iter, 0)?;

    if let Some((position, token)) = iter.next() {
        log::debug!("rejecting trailing input at token {position}");
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                          position });
    }

    log::debug!("parsed {} tokens into a tree of depth {depth}", tokens.len());
    Ok(expr)
}

/// Parses and evaluates a complete token sequence.
///
/// # Errors
/// Returns a `ParseError` if the sequence is not a valid expression, or
/// `ParseError::Evaluation` if evaluating it fails.
///
/// # Example
/// ```
/// use calcfront::interpreter::{lexer::lex, parser::core::parse};
///
/// assert_eq!(parse(&lex("2*(7+1)")).unwrap(), 16);
/// assert!(parse(&lex("-1")).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<i64> {
    let expr = parse_tree(tokens)?;
    Ok(evaluate(&expr)?)
}
