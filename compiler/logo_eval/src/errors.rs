//! Error taxonomy.
//!
//! Two families, kept apart so a front end can react differently:
//!
//! - [`ParseError`] is raised while analyzing. [`ParseError::Unterminated`]
//!   means "the input stopped before this construct closed" and is the
//!   signal an interactive driver uses to ask for another line.
//! - [`ProgramError`] is raised while executing, including by primitives
//!   guarding their arguments.
//!
//! [`LogoError`] wraps both at the evaluation boundary. Nothing inside the
//! runtime catches these; they propagate to whoever called `eval`.

use std::fmt;

use thiserror::Error;

/// Syntactic construct that was being analyzed when input ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Construct {
    String,
    List,
    Group,
    Conditional,
    Loop,
    While,
    Procedure,
    Variable,
    Call,
    Operator,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::String => "string",
            Self::List => "list",
            Self::Group => "parenthesized expression",
            Self::Conditional => "conditional",
            Self::Loop => "loop",
            Self::While => "while loop",
            Self::Procedure => "procedure definition",
            Self::Variable => "variable definition",
            Self::Call => "call",
            Self::Operator => "operator expression",
        };
        f.write_str(text)
    }
}

/// Error raised during analysis.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended before the construct was complete.
    #[error("unterminated {0}")]
    Unterminated(Construct),
    /// A token starting with a digit is neither an integer nor a float.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    /// A definition appeared where a value is required.
    #[error("expected an expression in {construct}, found a definition")]
    ExpectedExpression { construct: Construct },
    /// A group was followed by something other than `)`.
    #[error("expected `)`, found `{found}`")]
    UnclosedGroup { found: String },
    /// Expressions nested past the analyzer's depth limit.
    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

impl ParseError {
    /// Whether more input could complete the program.
    pub fn is_unterminated(&self) -> bool {
        matches!(self, Self::Unterminated(_))
    }
}

/// Error raised during execution.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ProgramError {
    /// Name not bound anywhere in the environment chain.
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),
    /// A primitive rejected an argument beyond its configured bound.
    #[error("{name}: {value} is out of range (limit {limit})")]
    OutOfRange { name: String, value: f64, limit: f64 },
    /// An operator was applied to values it has no rule for.
    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    /// A primitive received an argument of the wrong kind.
    #[error("{name} expects {expected}, got {got}")]
    WrongArgType {
        name: String,
        expected: &'static str,
        got: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {0}")]
    IntegerOverflow(&'static str),
    /// Loop counts must evaluate to an integer.
    #[error("loop count must be an integer, got {0}")]
    InvalidLoopCount(&'static str),
    /// Free-form failure reported by a host primitive.
    #[error("{0}")]
    Host(String),
}

/// Any failure of a top-level evaluation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LogoError {
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
    #[error("program error: {0}")]
    Program(#[from] ProgramError),
}

impl LogoError {
    /// `true` when the source is a prefix of a valid program.
    ///
    /// Interactive drivers keep the text and ask for more input in that case.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Parse(err) if err.is_unterminated())
    }
}

pub type ProgramResult<T> = Result<T, ProgramError>;
