use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
};

use crate::{
    ast::{Branch, Expr, Node, Statement},
    interpreter::value::Value,
};

/// Stores the runtime execution context.
///
/// This struct holds the interpreter state: the variable store and the
/// program's input and output streams. The store is an explicit owned object
/// rather than process-wide state, so every program run is isolated and
/// tests run concurrently against in-memory streams without sharing
/// anything.
///
/// ## Usage
///
/// A `Context` is created once per program run. [`Context::new`] wires it to
/// the process's standard streams; [`Context::with_io`] accepts arbitrary
/// reader/writer pairs.
pub struct Context<'io> {
    /// The variable store: name to current value, created on first
    /// assignment or first `input`, alive for the whole run.
    variables: HashMap<String, Value>,
    /// Where `input` statements read one line from.
    input:     Box<dyn BufRead + 'io>,
    /// Where `prt` statements write rendered values to.
    output:    Box<dyn Write + 'io>,
}

#[allow(clippy::new_without_default)]
impl<'io> Context<'io> {
    /// Creates a context wired to the process's standard input and output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }

    /// Creates a context with an empty variable store over the given
    /// streams.
    ///
    /// # Parameters
    /// - `input`: Source of lines for `input` statements.
    /// - `output`: Sink for `prt` statements.
    pub fn with_io(input: impl BufRead + 'io, output: impl Write + 'io) -> Self {
        Self { variables: HashMap::new(),
               input:     Box::new(input),
               output:    Box::new(output), }
    }

    /// Looks up a variable's current value.
    ///
    /// An undefined name is not an error at the store level; deciding what
    /// an unresolved token means is the literal resolver's job.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds a variable to a value, creating it on first assignment.
    pub fn set_variable(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Executes a parsed program, statement by statement.
    ///
    /// This is the main entry point for execution. Chains dispatch to at
    /// most one branch body, which is executed by the same function
    /// recursively.
    ///
    /// # Errors
    /// Returns an error only when writing output or reading input fails at
    /// the I/O level. Script-level failures never propagate; they are
    /// ordinary [`Value::Error`] values.
    pub fn exec_program(&mut self, program: &[Node]) -> io::Result<()> {
        for node in program {
            match node {
                Node::Statement(statement) => self.exec_statement(statement)?,
                Node::Chain { branches, else_body } => {
                    self.exec_chain(branches, else_body.as_deref())?;
                },
            }
        }

        Ok(())
    }

    /// Executes a single non-block statement.
    ///
    /// - `prt` evaluates its expression and emits one rendered line.
    /// - `input` reads one line verbatim (only the terminator is removed)
    ///   and stores it as a string; end of input stores the empty string.
    /// - Assignment evaluates its right side and stores the result, error
    ///   values included.
    /// - No-ops do nothing.
    ///
    /// # Errors
    /// Returns an error when the underlying read or write fails.
    pub fn exec_statement(&mut self, statement: &Statement) -> io::Result<()> {
        match statement {
            Statement::Print { value } => {
                let rendered = self.eval(value);
                writeln!(self.output, "{rendered}")
            },
            Statement::Input { name } => {
                let mut line = String::new();
                self.input.read_line(&mut line)?;

                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }

                self.set_variable(name.clone(), Value::String(line));
                Ok(())
            },
            Statement::Assign { name, value } => {
                let value = self.eval(value);
                self.set_variable(name.clone(), value);
                Ok(())
            },
            Statement::Noop => Ok(()),
        }
    }

    /// Executes a conditional chain.
    ///
    /// Branch conditions are evaluated in source order until one yields
    /// `Bool(true)`; that branch's body runs, the chain is satisfied, and
    /// later conditions are not evaluated. With no satisfied branch the
    /// `else` body runs, if present. A non-boolean condition value never
    /// fires a branch.
    ///
    /// # Errors
    /// Returns an error when the executed body fails at the I/O level.
    fn exec_chain(&mut self, branches: &[Branch], else_body: Option<&[Node]>) -> io::Result<()> {
        for branch in branches {
            if self.eval(&branch.condition).is_truthy() {
                return self.exec_program(&branch.body);
            }
        }

        match else_body {
            Some(body) => self.exec_program(body),
            None => Ok(()),
        }
    }

    /// Evaluates an expression tree into a value.
    ///
    /// Operands go through the literal resolver; comparisons evaluate both
    /// sides recursively and apply the comparison semantics. The result of a
    /// comparison is always `Bool`, even when an operand resolved to an
    /// error value.
    #[must_use]
    pub fn eval(&self, expr: &Expr) -> Value {
        match expr {
            Expr::Operand { text } => self.resolve_operand(text),
            Expr::Comparison { op, left, right } => {
                let left = self.eval(left);
                let right = self.eval(right);

                Self::eval_comparison(*op, &left, &right)
            },
        }
    }
}
