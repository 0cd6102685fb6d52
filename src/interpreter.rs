/// The evaluator module executes the block tree and computes results.
///
/// The evaluator walks a parsed [`crate::ast::Program`], runs statements in
/// order, resolves operands against the variable store, applies comparison
/// semantics, and drives conditional chains so that at most one branch body
/// per chain ever executes.
///
/// # Responsibilities
/// - Owns the runtime state: the variable store and the I/O streams.
/// - Evaluates expressions into [`crate::interpreter::value::Value`]s.
/// - Executes `prt`, `input`, and assignment statements.
pub mod evaluator;
/// The lexer module classifies numeric literal tokens.
///
/// The lexer recognizes decimal floating-point literals inside an operand
/// token. The literal resolver uses the match extent to tell a full numeric
/// literal apart from a numeric prefix with trailing junk; the two cases
/// produce a number and an invalid-number-format error value respectively.
///
/// # Responsibilities
/// - Matches the decimal float literal forms (`42`, `3.14`, `.5`, `2e-10`).
/// - Parses a matched slice into an `f64`.
pub mod lexer;
/// The parser module builds the block tree from raw source lines.
///
/// The parser makes a single pass over the line sequence, locating
/// brace-delimited blocks by balance counting, resolving `if` / `else if` /
/// `else` chains into chain nodes, classifying the remaining lines into
/// statements, and splitting expressions at comparison operators. Parsing is
/// total: malformed input degrades to no-ops and fallback slices, never to a
/// reported error.
///
/// # Responsibilities
/// - Locates block ends and extracts block content.
/// - Resolves conditional chains and their resume positions.
/// - Builds expression trees with the documented operator priority.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the tagged [`value::Value`] union of string, number,
/// boolean, empty, and error, together with its canonical text rendering.
/// Error values are first-class: they flow through assignment, printing, and
/// comparison like any other value.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variant-specific rendering.
/// - Provides the numeric field accessor used by ordering comparisons.
pub mod value;
