use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to divide by zero.
    DivisionByZero {
        /// Token index of the `/` operator.
        position: usize,
    },
    /// The result of an operation does not fit in an `i64`.
    Overflow {
        /// The operator that overflowed.
        op:       BinaryOperator,
        /// Token index of the operator.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at token {position}: Division by zero.")
            },
            Self::Overflow { op, position } => {
                write!(f, "Error at token {position}: Integer overflow in '{op}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
