/// Represents a comparison operator.
///
/// Comparison operators are the only operators the language has. They are
/// detected in a fixed priority order (see
/// [`crate::interpreter::parser::expr`]), not in textual order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompareOp {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::Less => "<",
        };
        write!(f, "{operator}")
    }
}

/// An expression tree node.
///
/// Expressions are either a single operand or a comparison between two
/// sub-expressions. Operands keep their raw trimmed source text: resolution
/// against the variable store happens at evaluation time, because a token may
/// name a variable whose value only exists once earlier statements have run.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A single operand: a quoted string, a variable name, a numeric literal,
    /// or garbage that resolves to an error value.
    Operand {
        /// The raw trimmed token text.
        text: String,
    },
    /// A comparison between two sub-expressions.
    Comparison {
        /// The comparison operator.
        op:    CompareOp,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a single non-block statement.
///
/// Statements are classified from a trimmed source line by
/// [`crate::interpreter::parser::statement::parse_statement`]. Unrecognized
/// lines become [`Statement::Noop`]; the language never rejects a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `prt <expr>`: evaluate, render, and emit one output line.
    Print {
        /// The expression whose rendered value is printed.
        value: Expr,
    },
    /// `input <identifier>`: read one line of external input verbatim and
    /// store it as a string.
    Input {
        /// The variable that receives the input line.
        name: String,
    },
    /// `<identifier>=<expr>`: evaluate the right side and store it.
    Assign {
        /// The variable being assigned.
        name:  String,
        /// The value expression.
        value: Expr,
    },
    /// Anything else: blank lines, bare braces, unrecognized text.
    Noop,
}

/// One branch of a conditional chain: a condition and the block it guards.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// The branch condition, taken from between the header's parentheses.
    pub condition: Expr,
    /// The parsed content of the branch's block.
    pub body:      Program,
}

/// A node of the block tree.
///
/// A program is a flat sequence of nodes; a node is either a plain statement
/// or a whole `if` / `else if` / `else` chain resolved as one unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A single non-block statement.
    Statement(Statement),
    /// A conditional chain. At most one branch body is ever executed.
    Chain {
        /// The `if` branch followed by any `else if` branches, in source
        /// order.
        branches:  Vec<Branch>,
        /// The trailing `else` block, if present.
        else_body: Option<Program>,
    },
}

/// A parsed program: the block tree built by a single pass over source lines.
pub type Program = Vec<Node>;
