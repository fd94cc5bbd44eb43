//! Node execution.
//!
//! A single dispatcher over [`Node`]. Everything here runs at execution
//! time against the frame it is given; nothing is re-analyzed.

use crate::environment::Environment;
use crate::errors::{ProgramError, ProgramResult};
use crate::node::Node;
use crate::operators::evaluate_binary;
use crate::value::Value;

/// Execute `node` in `env`.
pub fn execute(node: &Node, env: &Environment) -> ProgramResult<Value> {
    match node {
        Node::Literal(value) => Ok(value.clone()),
        Node::List(items) => {
            let values = items
                .iter()
                .map(|item| execute(item, env))
                .collect::<ProgramResult<Vec<_>>>()?;
            Ok(Value::list(values))
        }
        Node::If {
            condition,
            consequence,
            alternate,
        } => {
            if execute(condition, env)?.is_truthy() {
                execute(consequence, env)
            } else {
                execute(alternate, env)
            }
        }
        Node::Loop { count, body } => execute_loop(count, body, env),
        Node::While { condition, body } => {
            let mut last = Value::Unit;
            while execute(condition, env)?.is_truthy() {
                last = execute(body, env)?;
            }
            Ok(last)
        }
        Node::Call { callee, args } => {
            let args = args
                .iter()
                .map(|arg| execute(arg, env))
                .collect::<ProgramResult<Vec<_>>>()?;
            callee.call(args)
        }
        Node::VarRef(name) => env.lookup(name),
        Node::Infix { op, left, right } => {
            let left = execute(left, env)?;
            let right = execute(right, env)?;
            evaluate_binary(*op, &left, &right)
        }
        Node::Block(nodes) => execute_block(nodes, env),
    }
}

/// Run every node for effect, returning the last value.
pub fn execute_block(nodes: &[Node], env: &Environment) -> ProgramResult<Value> {
    let mut last = Value::Unit;
    for node in nodes {
        last = execute(node, env)?;
    }
    Ok(last)
}

/// The count is evaluated once per execution of the loop. Non-positive
/// counts run the body zero times; the count itself is the result.
fn execute_loop(count: &Node, body: &Node, env: &Environment) -> ProgramResult<Value> {
    let count = execute(count, env)?;
    let Value::Int(times) = count else {
        return Err(ProgramError::InvalidLoopCount(count.type_name()));
    };
    for _ in 0..times.max(0) {
        execute(body, env)?;
    }
    Ok(count)
}
