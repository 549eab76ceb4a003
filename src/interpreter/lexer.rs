use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
///
/// Every token corresponds to exactly one source character. Digits are not
/// merged here; a run of `IntDigit` tokens is folded into a single literal by
/// the parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// A single decimal digit, carrying its numeric value.
    #[regex(r"[0-9]", parse_digit)]
    IntDigit(u8),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
}

/// The kind of a [`Token`], without its payload.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// A decimal digit.
    IntDigit,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// An ordered token sequence. Index `i` is the `i`-th recognized character.
pub type TokenSequence = Vec<Token>;

impl Token {
    /// Returns the payload-free kind of this token.
    ///
    /// # Example
    /// ```
    /// use calcfront::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::IntDigit(7).kind(), TokenKind::IntDigit);
    /// assert_eq!(Token::Plus.kind(), TokenKind::Plus);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::OpenParen => TokenKind::OpenParen,
            Self::CloseParen => TokenKind::CloseParen,
            Self::IntDigit(_) => TokenKind::IntDigit,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
        }
    }

    /// Returns the digit value for `IntDigit` tokens and `None` otherwise.
    ///
    /// # Example
    /// ```
    /// use calcfront::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::IntDigit(3).digit(), Some(3));
    /// assert_eq!(Token::OpenParen.digit(), None);
    /// ```
    #[must_use]
    pub const fn digit(&self) -> Option<u8> {
        match self {
            Self::IntDigit(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns `true` if this token can begin a factor (a digit or `(`).
    #[must_use]
    pub const fn starts_factor(&self) -> bool {
        matches!(self, Self::IntDigit(_) | Self::OpenParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::IntDigit(d) => write!(f, "{d}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

/// Converts raw text into a token sequence.
///
/// One token is produced per recognized character, in source order. Any
/// character that is not a digit, an operator, or a parenthesis is skipped;
/// this function never fails.
///
/// # Example
/// ```
/// use calcfront::interpreter::lexer::{Token, lex};
///
/// assert_eq!(lex("12+(3)"),
///            vec![Token::IntDigit(1),
///                 Token::IntDigit(2),
///                 Token::Plus,
///                 Token::OpenParen,
///                 Token::IntDigit(3),
///                 Token::CloseParen]);
/// assert_eq!(lex("1 x 2"), vec![Token::IntDigit(1), Token::IntDigit(2)]);
/// ```
#[must_use]
pub fn lex(text: &str) -> TokenSequence {
    let mut tokens = Vec::with_capacity(text.len());
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            log::trace!("skipping unrecognized input {:?} at byte {}",
                        lexer.slice(),
                        lexer.span().start);
        }
    }

    log::debug!("lexed {} tokens from {} bytes", tokens.len(), text.len());
    tokens
}

/// Parses the value of a single-digit token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(u8)`: The digit value, `0` through `9`.
/// - `None`: If the slice is not a single ASCII digit.
fn parse_digit(lex: &logos::Lexer<Token>) -> Option<u8> {
    match lex.slice().as_bytes() {
        [b @ b'0'..=b'9'] => Some(b - b'0'),
        _ => None,
    }
}
