use crate::{
    error::ResolveError,
    interpreter::{
        evaluator::core::Context,
        lexer::{classify_numeric, NumericShape},
        value::Value,
    },
};

impl Context<'_> {
    /// Resolves a trimmed, operator-free token into a value.
    ///
    /// Resolution policy, in order:
    /// 1. Empty text is `Empty`.
    /// 2. Text of length ≥ 2 whose first and last characters are `"` is a
    ///    string of the inner substring, with no escape processing and no
    ///    interior trimming.
    /// 3. Text exactly matching an existing variable name yields a copy of
    ///    that variable's current value. Variables shadow the remaining
    ///    literal forms: the store is consulted before them.
    /// 4. The keywords `true` and `false` are boolean literals, so `if
    ///    (true)` fires its branch.
    /// 5. Otherwise the token must parse in its entirety as a decimal float
    ///    literal. A full parse yields a number; a numeric prefix with
    ///    trailing characters yields the invalid-number-format error value;
    ///    anything else yields the unknown-identifier error value.
    ///
    /// These are the only two failure kinds in the language, and both are
    /// first-class values; resolution itself never fails.
    ///
    /// # Parameters
    /// - `text`: The operand token, trimmed or not.
    ///
    /// # Returns
    /// The resolved [`Value`].
    #[must_use]
    pub fn resolve_operand(&self, text: &str) -> Value {
        let token = text.trim();

        if token.is_empty() {
            return Value::Empty;
        }

        if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
            return Value::String(token[1..token.len() - 1].to_string());
        }

        if let Some(value) = self.get_variable(token) {
            return value.clone();
        }

        match token {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {},
        }

        match classify_numeric(token) {
            NumericShape::Full(number) => Value::Number(number),
            NumericShape::Partial => {
                Value::Error(ResolveError::InvalidNumberFormat { token: token.to_string() })
            },
            NumericShape::NotNumeric => {
                Value::Error(ResolveError::UnknownIdentifier { token: token.to_string() })
            },
        }
    }
}
