use crate::{
    ast::{Node, Program},
    interpreter::parser::{chain::parse_chain, statement::parse_statement},
};

/// Parses a flat line sequence into a program.
///
/// This is the single pass over the source that builds the block tree. Lines
/// whose trimmed text starts with `if` open a conditional chain, which
/// consumes its whole `if` / `else if` / `else` range in one step; every
/// other line becomes a single statement node. Block contents are parsed by
/// the same function recursively, so nesting depth is bounded only by the
/// source.
///
/// Parsing is total: there is no malformed program, only statements that
/// turn out to be no-ops and operands that resolve to error values at
/// evaluation time.
///
/// # Parameters
/// - `lines`: The raw source lines, 1:1 with the input file (or a block's
///   extracted content).
///
/// # Returns
/// The parsed [`Program`].
///
/// # Example
/// ```
/// use linea::interpreter::parser::core::parse_program;
///
/// let lines: Vec<String> = ["x=1", "prt x"].iter().map(|s| s.to_string()).collect();
/// let program = parse_program(&lines);
///
/// assert_eq!(program.len(), 2);
/// ```
#[must_use]
pub fn parse_program(lines: &[String]) -> Program {
    let mut nodes = Vec::new();
    let mut pos = 0;

    while pos < lines.len() {
        if lines[pos].trim().starts_with("if") {
            let (node, next) = parse_chain(lines, pos);
            nodes.push(node);
            pos = next;
        } else {
            nodes.push(Node::Statement(parse_statement(&lines[pos])));
            pos += 1;
        }
    }

    nodes
}
