use crate::error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
///
/// Callers that only need accept/reject can treat every variant the same;
/// the variants exist to produce useful messages.
pub enum ParseError {
    /// An operand (a digit or `(`) was required but another token was found.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Token index where the error occurred.
        position: usize,
    },
    /// An operand was required but the input ended.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Token index of the unmatched `(`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first leftover token.
        token:    String,
        /// Token index of the first leftover token.
        position: usize,
    },
    /// A literal value was too large to be represented as an `i64`.
    LiteralTooLarge {
        /// Token index of the literal's first digit.
        position: usize,
    },
    /// Too many parentheses were open at once.
    NestingTooDeep {
        /// Token index of the `(` that exceeded the limit.
        position: usize,
    },
    /// The expression tree grew deeper than the parser allows.
    ExpressionTooDeep {
        /// Token index of the operator that exceeded the limit.
        position: usize,
    },
    /// The expression parsed but could not be evaluated.
    Evaluation(RuntimeError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => write!(f,
                                                                "Error at token {position}: Expected a number or '(' but found '{token}'."),

            Self::UnexpectedEndOfInput => {
                write!(f, "Error: Unexpected end of input, expected a number or '('.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at token {position}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at token {position}: Extra tokens after expression, starting with '{token}'."),

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at token {position}: Literal is too large.")
            },

            Self::NestingTooDeep { position } => {
                write!(f, "Error at token {position}: Parentheses are nested too deeply.")
            },

            Self::ExpressionTooDeep { position } => {
                write!(f, "Error at token {position}: Expression is nested too deeply.")
            },

            Self::Evaluation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Evaluation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RuntimeError> for ParseError {
    fn from(value: RuntimeError) -> Self {
        Self::Evaluation(value)
    }
}
