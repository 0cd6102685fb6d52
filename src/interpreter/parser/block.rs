/// Finds the line index where the block opened at `start` closes.
///
/// Scans line `start` onward, keeping a brace-balance counter that moves on
/// every `{` and `}` in each line's full text, not just the header, so
/// braces anywhere on a line count. The balance must first leave zero before
/// a return to zero marks the end line; this lets the opening `{` sit on the
/// header line or on any later line, and lets a block open and close on a
/// single line.
///
/// If no balanced close exists, the last line index is returned: unbalanced
/// braces fall back to end-of-input rather than failing.
///
/// # Parameters
/// - `lines`: The full line sequence being resolved.
/// - `start`: Index of the block's header line.
///
/// # Returns
/// The index of the line on which the block's brace balance returns to zero,
/// or the last line index when it never does.
///
/// # Example
/// ```
/// use linea::interpreter::parser::block::find_block_end;
///
/// let lines: Vec<String> = ["if (x > 0)", "{", "prt x", "}"].iter()
///                                                           .map(|s| s.to_string())
///                                                           .collect();
///
/// assert_eq!(find_block_end(&lines, 0), 3);
/// ```
#[must_use]
pub fn find_block_end(lines: &[String], start: usize) -> usize {
    let mut balance = 0i64;
    let mut started = false;

    for (index, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => balance += 1,
                '}' => balance -= 1,
                _ => continue,
            }

            if balance != 0 {
                started = true;
            } else if started {
                return index;
            }
        }
    }

    lines.len().saturating_sub(1)
}

/// Extracts the content of the block spanning `[start, end]` as a new flat
/// line sequence.
///
/// For a single-line block (`start == end`) the content is the text strictly
/// between the first `{` and the last `}` on that line, as one logical line.
/// Otherwise the first element is the text after the first `{` on the start
/// line, the middle elements are the lines strictly between `start` and
/// `end` verbatim, and the last element is the text before the last `}` on
/// the end line.
///
/// The result is executed independently, so no line-number remapping is
/// needed. Missing braces degrade to empty or whole-line slices; the
/// function never fails.
///
/// # Parameters
/// - `lines`: The full line sequence being resolved.
/// - `start`: Index of the block's header line.
/// - `end`: Index of the block's closing line, from [`find_block_end`].
///
/// # Returns
/// The block's inner lines, ready for recursive parsing.
#[must_use]
pub fn block_content(lines: &[String], start: usize, end: usize) -> Vec<String> {
    if start == end {
        let line = &lines[start];
        let open = line.find('{').map_or(line.len(), |i| i + 1);
        let close = line.rfind('}').unwrap_or(line.len()).max(open);

        return vec![line[open..close].to_string()];
    }

    let mut content = Vec::with_capacity(end - start + 1);

    let first = &lines[start];
    content.push(first.find('{')
                      .map_or_else(String::new, |i| first[i + 1..].to_string()));

    content.extend(lines[start + 1..end].iter().cloned());

    let last = &lines[end];
    content.push(last[..last.rfind('}').unwrap_or(last.len())].to_string());

    content
}
