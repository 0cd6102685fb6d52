use crate::ast::{CompareOp, Expr};

/// The comparison operators in detection priority order.
///
/// Detection scans the expression text once per entry and stops at the first
/// entry that occurs anywhere in the text. The two-character operators come
/// first so that `>=` is never misread as `>` followed by a stray `=`, and
/// `==` outranks a `<` appearing earlier in the text.
pub const OPERATORS: [(&str, CompareOp); 6] = [("==", CompareOp::Equal),
                                               ("!=", CompareOp::NotEqual),
                                               (">=", CompareOp::GreaterEqual),
                                               ("<=", CompareOp::LessEqual),
                                               (">", CompareOp::Greater),
                                               ("<", CompareOp::Less)];

/// Parses expression text into an expression tree.
///
/// The text is trimmed, then scanned for at most one comparison operator in
/// the priority order of [`OPERATORS`]. With no operator present the whole
/// text becomes a single operand, resolved later against the variable store.
/// Otherwise the text is split around the match and both sides are
/// recursively parsed as full expressions, so a side may itself contain a
/// comparison. Nested comparisons have no documented use in the language,
/// but they are accepted.
///
/// The scan is a plain substring search: an operator inside a quoted string
/// is found like any other occurrence. Quoting does not protect operand
/// text from detection.
///
/// Parsing never fails; there is no malformed expression, only operands that
/// later resolve to error values.
///
/// # Parameters
/// - `text`: Raw expression text, trimmed or not.
///
/// # Returns
/// The parsed [`Expr`] tree.
///
/// # Example
/// ```
/// use linea::{
///     ast::{CompareOp, Expr},
///     interpreter::parser::expr::parse_expression,
/// };
///
/// let expr = parse_expression("x >= 10");
///
/// assert_eq!(expr,
///            Expr::Comparison { op:    CompareOp::GreaterEqual,
///                               left:  Box::new(Expr::Operand { text: "x".to_string() }),
///                               right: Box::new(Expr::Operand { text: "10".to_string() }), });
/// ```
#[must_use]
pub fn parse_expression(text: &str) -> Expr {
    let trimmed = text.trim();

    for (symbol, op) in OPERATORS {
        if let Some(index) = trimmed.find(symbol) {
            let left = parse_expression(&trimmed[..index]);
            let right = parse_expression(&trimmed[index + symbol.len()..]);

            return Expr::Comparison { op,
                                      left: Box::new(left),
                                      right: Box::new(right) };
        }
    }

    Expr::Operand { text: trimmed.to_string() }
}
