use crate::{
    ast::Statement,
    interpreter::parser::expr::parse_expression,
};

/// Parses a single non-block line into a statement.
///
/// A statement may be one of:
/// - a print statement (`prt <expr>`).
/// - an input statement (`input <identifier>`).
/// - an assignment (`<identifier>=<expr>`).
/// - a no-op (anything else).
///
/// Classification is attempted in that order; the first matching shape wins.
/// Blank lines, structural lines like a bare `{` or `}`, and unrecognized
/// text are all silently classified as no-ops; the language has no syntax
/// errors at the statement level.
///
/// # Parameters
/// - `line`: One raw source line.
///
/// # Returns
/// The classified [`Statement`].
///
/// # Example
/// ```
/// use linea::{ast::Statement, interpreter::parser::statement::parse_statement};
///
/// assert!(matches!(parse_statement("x=5"), Statement::Assign { .. }));
/// assert!(matches!(parse_statement("}"), Statement::Noop));
/// ```
#[must_use]
pub fn parse_statement(line: &str) -> Statement {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix("prt ") {
        return Statement::Print { value: parse_expression(rest) };
    }

    if let Some(rest) = trimmed.strip_prefix("input ") {
        // The variable name is the first whitespace-delimited token; a bare
        // `input ` with nothing after it is a no-op.
        return match rest.split_whitespace().next() {
            Some(name) => Statement::Input { name: name.to_string() },
            None => Statement::Noop,
        };
    }

    if let Some(index) = find_assignment(trimmed) {
        let name = trimmed[..index].trim();

        if !name.is_empty() && !name.contains(char::is_whitespace) {
            return Statement::Assign { name:  name.to_string(),
                                       value: parse_expression(&trimmed[index + 1..]), };
        }
    }

    Statement::Noop
}

/// Finds the position of an assignment `=` in a trimmed line.
///
/// An `=` only counts as assignment when it is not part of `==`, `!=`, `>=`,
/// or `<=`, which is decided by inspecting the characters immediately before
/// and after it. The scan continues past disqualified occurrences, so a line
/// like `x = a == b` assigns the comparison to `x`.
///
/// # Parameters
/// - `line`: The trimmed line text.
///
/// # Returns
/// - `Some(index)`: Byte position of the first qualifying `=`.
/// - `None`: The line contains no assignment operator.
fn find_assignment(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();

    for (index, &byte) in bytes.iter().enumerate() {
        if byte != b'=' {
            continue;
        }

        let before = index.checked_sub(1).map(|i| bytes[i]);
        if matches!(before, Some(b'=' | b'!' | b'>' | b'<')) {
            continue;
        }
        if bytes.get(index + 1) == Some(&b'=') {
            continue;
        }

        return Some(index);
    }

    None
}
