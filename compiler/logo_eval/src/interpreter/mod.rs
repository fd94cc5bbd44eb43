//! Program driver.
//!
//! An [`Interpreter`] owns the root environment programs run in and the
//! keyword table they are analyzed with. Each [`Interpreter::eval`] call
//! tokenizes, analyzes and executes one complete source text; definitions
//! persist in the root environment between calls.

mod builder;

pub use builder::InterpreterBuilder;

use logo_lexer::tokenize;
use tracing::debug;

use crate::analyzer::Analyzer;
use crate::builtins::builtin_environment;
use crate::callable::{Callable, Primitive};
use crate::environment::Environment;
use crate::errors::{LogoError, ProgramResult};
use crate::exec::execute;
use crate::keywords::Keywords;
use crate::value::Value;

/// A root environment plus the keywords programs are written with.
pub struct Interpreter {
    env: Environment,
    keywords: Keywords,
}

impl Interpreter {
    /// An interpreter with the built-in primitives and French keywords.
    pub fn new() -> Self {
        Interpreter {
            env: builtin_environment(),
            keywords: Keywords::default(),
        }
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The root environment programs are evaluated in.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// Bind a host primitive in the root environment.
    ///
    /// Only code analyzed after registration sees the name as a call.
    pub fn register(
        &self,
        name: &str,
        arity: usize,
        func: impl Fn(&[Value]) -> ProgramResult<Value> + 'static,
    ) {
        let primitive = Primitive::named(name.to_lowercase(), arity, func);
        self.env
            .define(name.to_lowercase(), Value::Callable(Callable::from(primitive)));
    }

    /// Evaluate a complete source text, returning the value of its last
    /// expression (Unit when there is none).
    pub fn eval(&self, source: &str) -> Result<Value, LogoError> {
        evaluate_with(source, &self.env, &self.keywords)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate `source` in `root` with the default keywords.
///
/// `root` must already hold whatever primitives the program calls; see
/// [`crate::register_builtins`].
pub fn evaluate(source: &str, root: &Environment) -> Result<Value, LogoError> {
    evaluate_with(source, root, &Keywords::default())
}

/// Evaluate `source` in `root`, analyzing with `keywords`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate_with(
    source: &str,
    root: &Environment,
    keywords: &Keywords,
) -> Result<Value, LogoError> {
    let tokens = tokenize(source);
    debug!(tokens = tokens.len(), "tokenized");
    let program = Analyzer::new(root, keywords).analyze_program(&tokens)?;
    Ok(execute(&program, root)?)
}
