//! Primitives present in every root environment.
//!
//! The operator symbols are bound to arity-2 primitives so they also work
//! in prefix position (`+ 3 4`), and the trigonometric functions take
//! radians.

use crate::callable::{Callable, Primitive};
use crate::environment::Environment;
use crate::errors::{ProgramError, ProgramResult};
use crate::node::InfixOp;
use crate::operators::evaluate_binary;
use crate::value::Value;

/// Bind the built-in primitives into `env`.
pub fn register_builtins(env: &Environment) {
    for op in InfixOp::ALL {
        define(
            env,
            Primitive::named(op.as_symbol(), 2, move |args| {
                evaluate_binary(op, &args[0], &args[1])
            }),
        );
    }

    define(env, unary_float("sin", f64::sin));
    define(env, unary_float("cos", f64::cos));
    define(env, unary_float("tan", f64::tan));
}

/// A fresh root environment holding only the built-ins.
pub fn builtin_environment() -> Environment {
    let env = Environment::new();
    register_builtins(&env);
    env
}

/// Read a numeric argument, naming the primitive in the error.
pub fn expect_number(name: &str, value: &Value) -> ProgramResult<f64> {
    value.as_number().ok_or_else(|| ProgramError::WrongArgType {
        name: name.to_string(),
        expected: "a number",
        got: value.type_name(),
    })
}

fn unary_float(name: &'static str, f: fn(f64) -> f64) -> Primitive {
    Primitive::named(name, 1, move |args| {
        Ok(Value::Float(f(expect_number(name, &args[0])?)))
    })
}

fn define(env: &Environment, primitive: Primitive) {
    let name = primitive.name().unwrap_or_default().to_string();
    env.define(name, Value::Callable(Callable::from(primitive)));
}
