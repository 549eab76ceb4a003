use std::fmt;

/// The four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Integer division (`/`).
    Div,
}

impl BinaryOperator {
    /// Returns `true` for the tighter-binding operators, `*` and `/`.
    ///
    /// # Example
    /// ```
    /// use calcfront::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Div.is_multiplicative());
    /// assert!(!BinaryOperator::Sub.is_multiplicative());
    /// ```
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Positions are token indices into the sequence the tree was parsed from:
/// the first digit of a literal, or the operator token of a binary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A (possibly multi-digit) integer literal.
    Literal {
        /// The accumulated value of the digit run.
        value:    i64,
        /// Token index of the first digit.
        position: usize,
    },
    /// A binary operation. Both operands are always present.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Token index of the operator.
        position: usize,
    },
}

impl Expr {
    /// Gets the token position from `self`.
    /// ## Example
    /// ```
    /// use calcfront::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:    42,
    ///                            position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Returns the nesting depth of the tree. A literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            if let Self::BinaryOp { left, right, .. } = node {
                pending.push((left.as_ref(), depth + 1));
                pending.push((right.as_ref(), depth + 1));
            }
        }

        deepest
    }
}

/// Formats the tree as a prefix s-expression, e.g. `(+ 1 (* 2 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({op} {left} {right})"),
        }
    }
}
