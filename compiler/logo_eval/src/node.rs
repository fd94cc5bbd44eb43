//! Compiled expression nodes.
//!
//! The analyzer's only output. A node is built once and can be executed any
//! number of times (loop bodies, procedure bodies) without re-reading the
//! tokens. Definitions (`pour`, `donne`) take effect during analysis and
//! never become nodes.

use crate::callable::Callable;
use crate::value::Value;

/// Binary operators recognized in infix position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    LtEq,
    Eq,
    GtEq,
    Gt,
}

impl InfixOp {
    pub const ALL: [InfixOp; 9] = [
        InfixOp::Add,
        InfixOp::Sub,
        InfixOp::Mul,
        InfixOp::Div,
        InfixOp::Lt,
        InfixOp::LtEq,
        InfixOp::Eq,
        InfixOp::GtEq,
        InfixOp::Gt,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "+" => InfixOp::Add,
            "-" => InfixOp::Sub,
            "*" => InfixOp::Mul,
            "/" => InfixOp::Div,
            "<" => InfixOp::Lt,
            "<=" => InfixOp::LtEq,
            "=" => InfixOp::Eq,
            ">=" => InfixOp::GtEq,
            ">" => InfixOp::Gt,
            _ => return None,
        })
    }

    pub fn as_symbol(self) -> &'static str {
        match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Lt => "<",
            InfixOp::LtEq => "<=",
            InfixOp::Eq => "=",
            InfixOp::GtEq => ">=",
            InfixOp::Gt => ">",
        }
    }
}

/// An executable expression.
#[derive(Clone, Debug)]
pub enum Node {
    Literal(Value),
    /// Evaluates every element and collects the values.
    List(Vec<Node>),
    If {
        condition: Box<Node>,
        consequence: Box<Node>,
        alternate: Box<Node>,
    },
    Loop {
        count: Box<Node>,
        body: Box<Node>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    /// Callee resolved at analysis time; arguments evaluated left to right.
    Call {
        callee: Callable,
        args: Vec<Node>,
    },
    /// Deferred lookup of a name in the execution environment.
    VarRef(String),
    Infix {
        op: InfixOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Sequential composition: the value of the last node, Unit if empty.
    Block(Vec<Node>),
}

impl Node {
    pub fn unit() -> Self {
        Node::Literal(Value::Unit)
    }

    /// Sequence `nodes`, skipping the wrapper for a single node.
    pub fn block(mut nodes: Vec<Node>) -> Self {
        match nodes.len() {
            0 => Node::unit(),
            1 => nodes.pop().unwrap_or_else(Node::unit),
            _ => Node::Block(nodes),
        }
    }
}
