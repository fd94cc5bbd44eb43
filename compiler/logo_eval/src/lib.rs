//! Logo Eval - analyzer and evaluator for the Logo runtime.
//!
//! # Architecture
//!
//! Source text goes through [`logo_lexer::tokenize`], then the
//! [`Analyzer`] compiles the tokens one expression at a time into
//! [`Node`]s, which [`execute`] runs against an [`Environment`].
//! Procedure and variable definitions take effect while analyzing, so a
//! definition is visible to everything analyzed after it.
//!
//! - `Environment`: reference-counted frames with parent links
//! - `Value` / `Callable`: closed runtime value set; primitives and procedures
//! - `evaluate_binary`: operator semantics shared by infix and prefix forms
//! - `Interpreter`: root environment plus keyword table, the entry point
//!   host programs use to register primitives and evaluate source

pub mod analyzer;
mod builtins;
mod callable;
mod environment;
pub mod errors;
pub mod exec;
pub mod interpreter;
pub mod keywords;
mod node;
mod operators;
mod value;

pub use analyzer::{Analyzer, MAX_NESTING_DEPTH, PARAM_SIGIL};
pub use builtins::{builtin_environment, expect_number, register_builtins};
pub use callable::{Callable, NativeFn, Primitive, Procedure};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{Construct, LogoError, ParseError, ProgramError, ProgramResult};
pub use exec::execute;
pub use interpreter::{evaluate, evaluate_with, Interpreter, InterpreterBuilder};
pub use keywords::{KeywordSet, Keywords, Role, UnknownKeywordSet};
pub use node::{InfixOp, Node};
pub use operators::{evaluate_binary, values_equal};
pub use value::Value;
