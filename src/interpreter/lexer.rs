use logos::Logos;

/// Represents a numeric literal token inside an operand.
///
/// The literal resolver feeds it a whole trimmed operand and inspects how far
/// the match reached: a token that spans the entire operand is a number, a
/// shorter match is a partial parse, and no match at all means the operand is
/// not numeric.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Decimal literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`,
    /// with an optional leading sign.
    #[regex(r"[+-]?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
}

/// How a token classifies as a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericShape {
    /// The whole token is a valid decimal literal.
    Full(f64),
    /// The token starts like a number but has trailing characters.
    Partial,
    /// The token has no numeric prefix at all.
    NotNumeric,
}

/// Classifies a trimmed token as a numeric literal.
///
/// The token must be consumed in its entirety to count as a number; a
/// partial match (e.g. `12abc`) is reported separately so the resolver can
/// produce the invalid-number-format diagnostic instead of the generic
/// unknown-identifier one.
///
/// # Parameters
/// - `token`: The trimmed operand text.
///
/// # Returns
/// The [`NumericShape`] of the token.
///
/// # Example
/// ```
/// use linea::interpreter::lexer::{NumericShape, classify_numeric};
///
/// assert_eq!(classify_numeric("2.5"), NumericShape::Full(2.5));
/// assert_eq!(classify_numeric("12abc"), NumericShape::Partial);
/// assert_eq!(classify_numeric("abc"), NumericShape::NotNumeric);
/// ```
#[must_use]
pub fn classify_numeric(token: &str) -> NumericShape {
    let mut lexer = Token::lexer(token);

    match lexer.next() {
        Some(Ok(Token::Number(value))) => {
            if lexer.remainder().is_empty() {
                NumericShape::Full(value)
            } else {
                NumericShape::Partial
            }
        },
        _ => NumericShape::NotNumeric,
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
