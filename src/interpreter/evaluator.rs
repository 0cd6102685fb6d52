/// Comparison evaluation.
///
/// Implements the equality and ordering semantics applied once both operand
/// values are known.
pub mod comparison;

/// Core execution logic for programs and statements.
///
/// Contains the runtime context (variable store plus I/O streams), program
/// and statement execution, chain dispatch, and expression evaluation.
pub mod core;

/// Literal and identifier resolution.
///
/// Turns a trimmed, operator-free token into a value: quoted string, known
/// variable, numeric literal, or a first-class error value.
pub mod literal;
