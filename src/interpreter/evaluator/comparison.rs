use crate::{
    ast::CompareOp,
    interpreter::{evaluator::core::Context, value::Value},
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <CompareOp> Value`.
    ///
    /// For `==` and `!=`, two numbers are compared numerically; any other
    /// pairing falls back to comparing the canonical text renderings of both
    /// sides. Error values take part in the text fallback through their
    /// rendered `ERROR: ...` form.
    ///
    /// For `>`, `<`, `>=`, and `<=`, the numeric fields are compared
    /// directly: a non-numeric operand silently contributes `0`, so ordering
    /// is only meaningful between numbers.
    ///
    /// The result is always `Bool`, never an error value.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Example
    /// ```
    /// use linea::{
    ///     ast::CompareOp,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Context::eval_comparison(CompareOp::Less, &a, &b);
    ///
    /// assert_eq!(result, Value::Bool(true));
    /// ```
    #[must_use]
    pub fn eval_comparison(op: CompareOp, left: &Value, right: &Value) -> Value {
        Value::Bool(match op {
                        CompareOp::Equal => Self::values_equal(left, right),
                        CompareOp::NotEqual => !Self::values_equal(left, right),

                        CompareOp::Greater
                        | CompareOp::Less
                        | CompareOp::GreaterEqual
                        | CompareOp::LessEqual => {
                            let left = left.numeric_or_zero();
                            let right = right.numeric_or_zero();

                            match op {
                                CompareOp::Greater => left > right,
                                CompareOp::Less => left < right,
                                CompareOp::GreaterEqual => left >= right,
                                CompareOp::LessEqual => left <= right,
                                _ => unreachable!("ordering arm used with equality operator"),
                            }
                        },
                    })
    }

    /// Decides equality between two values.
    ///
    /// Numeric when both sides are numbers, rendered-text otherwise. The
    /// text fallback uses the same rendering as `prt`, so `"5.000000"`
    /// equals `5` while `"5"` does not.
    #[allow(clippy::float_cmp)]
    fn values_equal(left: &Value, right: &Value) -> bool {
        if left.is_number() && right.is_number() {
            return left.numeric_or_zero() == right.numeric_or_zero();
        }

        left.to_string() == right.to_string()
    }
}
