use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to an integer.
///
/// Operands are evaluated left before right, and the first failure aborts
/// the walk. The walk recurses once per level, which trees from the parser
/// bound by `MAX_TREE_DEPTH`.
///
/// # Errors
/// - `DivisionByZero` if a divisor evaluates to zero.
/// - `Overflow` if an intermediate result does not fit in an `i64`.
///
/// # Example
/// ```
/// use calcfront::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::evaluate,
/// };
///
/// let expr = Expr::BinaryOp { left:     Box::new(Expr::Literal { value:    21,
///                                                                position: 0, }),
///                             op:       BinaryOperator::Div,
///                             right:    Box::new(Expr::Literal { value:    7,
///                                                                position: 3, }),
///                             position: 2, };
///
/// assert_eq!(evaluate(&expr), Ok(3));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary_op(*op, left, right, *position)
        },
    }
}

/// Evaluates a single arithmetic operation on two integers.
///
/// Division truncates toward zero. Every operation is checked; none of them
/// wraps or panics.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Token index of the operator, for error reporting.
///
/// # Example
/// ```
/// use calcfront::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::evaluator::eval_binary_op,
/// };
///
/// assert_eq!(eval_binary_op(BinaryOperator::Sub, 1, 5, 0), Ok(-4));
/// assert_eq!(eval_binary_op(BinaryOperator::Div, 7, 2, 0), Ok(3));
/// assert_eq!(eval_binary_op(BinaryOperator::Div, 1, 0, 1),
///            Err(RuntimeError::DivisionByZero { position: 1 }));
/// ```
pub fn eval_binary_op(op: BinaryOperator,
                      left: i64,
                      right: i64,
                      position: usize)
                      -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    if op == Div && right == 0 {
        return Err(RuntimeError::DivisionByZero { position });
    }

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => left.checked_div(right),
    };

    result.ok_or(RuntimeError::Overflow { op, position })
}
