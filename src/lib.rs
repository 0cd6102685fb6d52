//! # linea
//!
//! linea is a minimal line-oriented scripting language interpreter written in
//! Rust. It reads a text program, executes statements top to bottom, and
//! supports variables, printing, line input, and single-level conditional
//! branching over comparison expressions.
//!
//! The language has no loops, no functions, and no arithmetic operators
//! beyond comparison. It also has no error mechanism: every failure is an
//! ordinary value that can be printed, assigned, and compared.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io;

use crate::interpreter::{evaluator::core::Context, parser::core::parse_program};

/// Defines the structure of parsed code.
///
/// This module declares the expression tree and the block tree that
/// represent source code after the parser's single pass over its lines.
/// Operands stay as raw text inside the tree; only block structure, chain
/// structure, and operator positions are resolved ahead of execution.
///
/// # Responsibilities
/// - Defines the comparison operator, expression, and statement types.
/// - Defines the chain node that models `if` / `else if` / `else` as one
///   unit with at most one executed branch.
pub mod ast;
/// Provides the literal-level diagnostic type.
///
/// This module defines the only two failure kinds in the language, unknown
/// identifier and invalid number format, both produced by the literal
/// resolver and carried inside error *values*, never raised. There is no
/// abort path for malformed programs.
///
/// # Responsibilities
/// - Defines the `ResolveError` enum with its rendered messages.
/// - Integrates with the standard error traits for use at crate boundaries.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, and value
/// representations to provide a complete runtime for line-oriented scripts.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and executing user code.
pub mod interpreter;

/// Parses and executes a whole program against the given context.
///
/// The source is split into its lines, parsed into a block tree in a single
/// pass, and executed statement by statement. Variables created during the
/// run stay in the context afterwards, so a caller can inspect them or run
/// further sources against the same state.
///
/// # Errors
/// Returns an error only when reading input or writing output fails at the
/// I/O level. Script-level failures such as unknown identifiers and
/// malformed numbers are ordinary error values inside the program and never
/// propagate.
///
/// # Examples
/// ```
/// use linea::{interpreter::evaluator::core::Context, run_source};
///
/// let mut output = Vec::new();
/// let mut context = Context::with_io(&b""[..], &mut output);
///
/// run_source("x=2\nprt x", &mut context).unwrap();
/// drop(context);
///
/// assert_eq!(output, b"2.000000\n");
/// ```
pub fn run_source(source: &str, context: &mut Context<'_>) -> io::Result<()> {
    let lines: Vec<String> = source.lines().map(str::to_string).collect();
    let program = parse_program(&lines);

    context.exec_program(&program)
}
