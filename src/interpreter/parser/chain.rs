use crate::{
    ast::{Branch, Node},
    interpreter::parser::{
        block::{block_content, find_block_end},
        core::parse_program,
        expr::parse_expression,
    },
};

/// Parses an `if` / `else if` / `else` chain starting at line `start`.
///
/// The `if` branch is consumed first: its condition comes from between the
/// header line's first `(` and last `)`, its block end from
/// [`find_block_end`], and its body from recursively parsing the block
/// content. Then, while the line *after* the current block end trims to text
/// starting with `else if`, another branch is consumed the same way. A
/// following line starting with `else` (but not `else if`) contributes the
/// final body and always ends the chain.
///
/// The `else if` / `else` header must begin its own line; a `} else {`
/// continuation on the closing-brace line is not recognized.
/// Every branch's line range is consumed whether or not it will
/// ever execute, which is what keeps the caller's resume position correct:
/// un-taken branches are structurally skipped, never textually executed.
///
/// # Parameters
/// - `lines`: The full line sequence being resolved.
/// - `start`: Index of the line whose trimmed text starts with `if`.
///
/// # Returns
/// The chain node and the index at which line-by-line parsing resumes
/// (one past the last line of the chain).
#[must_use]
pub fn parse_chain(lines: &[String], start: usize) -> (Node, usize) {
    let mut branches = Vec::new();
    let mut else_body = None;

    let mut pos = start;
    let mut end = find_block_end(lines, pos);
    branches.push(parse_branch(lines, pos, end));
    pos = end;

    loop {
        let Some(next) = lines.get(pos + 1) else {
            break;
        };
        let trimmed = next.trim();

        if trimmed.starts_with("else if") {
            pos += 1;
            end = find_block_end(lines, pos);
            branches.push(parse_branch(lines, pos, end));
            pos = end;
        } else if trimmed.starts_with("else") {
            pos += 1;
            end = find_block_end(lines, pos);
            else_body = Some(parse_program(&block_content(lines, pos, end)));
            pos = end;
            break;
        } else {
            break;
        }
    }

    (Node::Chain { branches, else_body }, pos + 1)
}

/// Parses one conditional branch: its condition and its block content.
fn parse_branch(lines: &[String], start: usize, end: usize) -> Branch {
    Branch { condition: parse_expression(condition_text(lines[start].trim())),
             body:      parse_program(&block_content(lines, start, end)), }
}

/// Slices the condition text out of a branch header line.
///
/// The condition is everything between the line's first `(` and its last
/// `)`. Missing parentheses degrade to best-effort slices rather than
/// errors: with no `(` the slice starts at the line's beginning, with no
/// `)` it runs to the line's end. The evaluator trims the result before
/// resolving it.
fn condition_text(line: &str) -> &str {
    let open = line.find('(').map_or(0, |i| i + 1);
    let close = line.rfind(')').unwrap_or(line.len()).max(open);

    &line[open..close]
}
