use crate::error::ResolveError;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, input statements, and conditional evaluations. Exactly one
/// variant is meaningful at a time, and every variant has a canonical text
/// rendering (see the [`std::fmt::Display`] impl).
///
/// Note that [`Value::Error`] is itself a first-class value: it can be
/// assigned, printed, and compared. Evaluation never aborts.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A text value, produced by quoted literals and `input` statements.
    String(String),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.). A chain
    /// branch fires only when its condition evaluates to `Bool(true)`.
    Bool(bool),
    /// The default, uninitialized value. Evaluating empty text yields this.
    Empty,
    /// A literal-resolution diagnostic carried as an ordinary value.
    Error(ResolveError),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<ResolveError> for Value {
    fn from(v: ResolveError) -> Self {
        Self::Error(v)
    }
}

impl Value {
    /// Returns the numeric field of the value, as ordering comparisons see
    /// it.
    ///
    /// Only [`Value::Number`] carries a numeric field; every other variant
    /// contributes `0`. Ordering comparisons between non-numeric operands
    /// therefore silently compare `0` against `0`.
    ///
    /// # Example
    /// ```
    /// use linea::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(2.5).numeric_or_zero(), 2.5);
    /// assert_eq!(Value::String("5".to_string()).numeric_or_zero(), 0.0);
    /// assert_eq!(Value::Bool(true).numeric_or_zero(), 0.0);
    /// ```
    #[must_use]
    pub const fn numeric_or_zero(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            _ => 0.0,
        }
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value fires a conditional branch.
    ///
    /// Only an exact `Bool(true)` is truthy. Numbers, strings, and error
    /// values never fire a branch, whatever they contain.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        matches!(self, Self::Bool(true))
    }
}

impl std::fmt::Display for Value {
    /// Renders the value in its canonical, variant-specific form.
    ///
    /// Numbers render with six fixed decimal places, so `prt 5` emits
    /// `5.000000`. Text-fallback equality comparisons use this same
    /// rendering, which makes `"5.000000" == 5` true and `"5" == 5` false.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n:.6}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Empty => write!(f, "EMPTY"),
            Self::Error(e) => write!(f, "ERROR: {e}"),
        }
    }
}
