#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the diagnostics the literal resolver can produce.
///
/// These are the only two failure kinds in the whole language, and neither is
/// raised: both travel inside [`crate::interpreter::value::Value::Error`] as
/// ordinary values that can be printed, assigned, and compared.
pub enum ResolveError {
    /// A token was not a quoted string, a known variable, or a valid number.
    UnknownIdentifier {
        /// The offending token text.
        token: String,
    },
    /// A token started like a number but had trailing unconsumed characters.
    InvalidNumberFormat {
        /// The offending token text.
        token: String,
    },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { token } => {
                write!(f, "Unknown identifier: '{token}'")
            },
            Self::InvalidNumberFormat { token } => {
                write!(f, "Invalid number format: '{token}'")
            },
        }
    }
}

impl std::error::Error for ResolveError {}
