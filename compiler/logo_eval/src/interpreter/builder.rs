//! `InterpreterBuilder` for creating Interpreter instances with host
//! primitives and a keyword table.

use super::Interpreter;
use crate::builtins::register_builtins;
use crate::callable::{Callable, Primitive};
use crate::environment::Environment;
use crate::errors::ProgramResult;
use crate::keywords::Keywords;
use crate::value::Value;

/// Builder for [`Interpreter`].
///
/// Host primitives go into their own frame and the root environment is a
/// child of it holding the built-ins, so programs can shadow a host name
/// without losing it for other interpreters built on the same parent.
pub struct InterpreterBuilder {
    keywords: Keywords,
    parent: Option<Environment>,
    primitives: Vec<Primitive>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            keywords: Keywords::default(),
            parent: None,
            primitives: Vec::new(),
        }
    }

    #[must_use]
    pub fn keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    /// Parent the host frame to an existing environment.
    #[must_use]
    pub fn parent(mut self, parent: Environment) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Add a host primitive.
    #[must_use]
    pub fn primitive(
        mut self,
        name: &str,
        arity: usize,
        func: impl Fn(&[Value]) -> ProgramResult<Value> + 'static,
    ) -> Self {
        self.primitives
            .push(Primitive::named(name.to_lowercase(), arity, func));
        self
    }

    pub fn build(self) -> Interpreter {
        let host = match self.parent {
            Some(parent) => parent.child(),
            None => Environment::new(),
        };
        for primitive in self.primitives {
            let name = primitive.name().unwrap_or_default().to_string();
            host.define(name, Value::Callable(Callable::from(primitive)));
        }

        let env = host.child();
        register_builtins(&env);
        Interpreter {
            env,
            keywords: self.keywords,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
