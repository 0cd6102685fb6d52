/// Block location and content extraction.
///
/// Finds the matching end of a brace-delimited block by balance counting and
/// slices out its inner lines, for single-line and multi-line blocks alike.
pub mod block;

/// Conditional chain resolution.
///
/// Consumes an `if` header, its block, any `else if` branches, and an
/// optional trailing `else`, producing one chain node and the position where
/// line-by-line parsing resumes.
pub mod chain;

/// Program construction.
///
/// The single pass over the line sequence that builds the block tree.
pub mod core;

/// Expression tree construction.
///
/// Splits expression text at comparison operators, detected in priority
/// order, and recursively builds the expression tree.
pub mod expr;

/// Statement classification.
///
/// Classifies a single trimmed line as a print, input, assignment, or no-op
/// statement.
pub mod statement;
