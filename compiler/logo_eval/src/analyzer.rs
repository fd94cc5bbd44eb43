//! Recursive-descent analyzer.
//!
//! Compiles tokens straight into [`Node`]s, one expression per
//! [`Analyzer::analyze`] call, with no separate syntax tree. Dispatch is on
//! the lower-cased token:
//!
//! | Token | Result |
//! |---|---|
//! | starts with a digit | integer, else float literal |
//! | `"` | string literal up to the next `"` |
//! | `[` | list of the expressions up to `]` |
//! | `(` | one expression followed by `)` |
//! | if / loop / while keyword | conditional, counted loop, while loop |
//! | procedure keyword | procedure definition, no node |
//! | variable keyword | variable definition, executed now, no node |
//! | name bound to a callable *now* | call consuming exactly `arity` expressions |
//! | anything else | variable lookup deferred to execution |
//!
//! After an expression, a following infix operator consumes the whole rest
//! of the expression as its right operand, so operator chains associate to
//! the right: `10 - 5 - 2` is `10 - (5 - 2)`. Call arguments are operands
//! and never absorb a trailing operator, so the prefix form `- 10 - 5 2`
//! reads as `10 - (5 - 2)` as well.
//!
//! Call recognition uses the environment as it is at that point of the
//! scan. A procedure used before its definition is therefore compiled as a
//! variable lookup and fails with `UnknownIdentifier` when executed; only a
//! procedure's own body can refer to it before it is complete.
//!
//! Nesting deeper than [`MAX_NESTING_DEPTH`] is rejected with
//! [`ParseError::TooDeep`].

use std::rc::Rc;

use logo_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::callable::{Callable, Procedure};
use crate::environment::Environment;
use crate::errors::{Construct, LogoError, ParseError};
use crate::exec::execute;
use crate::keywords::{Keywords, Role};
use crate::node::{InfixOp, Node};
use crate::value::Value;

/// Deepest expression nesting the analyzer accepts. Node trees and the list
/// values they build are executed and dropped recursively, so this also
/// bounds the host stack used outside procedure recursion.
pub const MAX_NESTING_DEPTH: usize = 500;

/// Leading character of procedure parameter tokens (`:taille`).
pub const PARAM_SIGIL: char = ':';

/// Node produced by one `analyze` step (`None` for definitions) and the
/// index of the first unconsumed token.
pub type Analyzed = (Option<Node>, usize);

pub type AnalyzeResult<T> = Result<T, LogoError>;

/// Token-stream compiler bound to the environment definitions go into.
pub struct Analyzer<'a> {
    env: &'a Environment,
    keywords: &'a Keywords,
    /// One entry per procedure body being analyzed, collecting the
    /// procedures defined directly inside it.
    enclosing: Vec<Vec<Rc<Procedure>>>,
    depth: usize,
}

impl<'a> Analyzer<'a> {
    pub fn new(env: &'a Environment, keywords: &'a Keywords) -> Self {
        Analyzer {
            env,
            keywords,
            enclosing: Vec::new(),
            depth: 0,
        }
    }

    /// Analyze every expression in `tokens` into one sequential block.
    pub fn analyze_program(&mut self, tokens: &[String]) -> AnalyzeResult<Node> {
        let mut nodes = Vec::new();
        let mut at = 0;
        while at < tokens.len() {
            let (node, next) = self.analyze(tokens, at)?;
            nodes.extend(node);
            at = next;
        }
        Ok(Node::block(nodes))
    }

    /// Analyze the expression starting at `tokens[at]`.
    pub fn analyze(&mut self, tokens: &[String], at: usize) -> AnalyzeResult<Analyzed> {
        self.nested(|this| match this.analyze_primary(tokens, at)? {
            (Some(left), next) => this.analyze_infix(left, tokens, next),
            analyzed => Ok(analyzed),
        })
    }

    /// Run one level of recursive analysis, enforcing [`MAX_NESTING_DEPTH`].
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> AnalyzeResult<T>) -> AnalyzeResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING_DEPTH,
            }
            .into());
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// One expression without a trailing infix operator.
    fn analyze_primary(&mut self, tokens: &[String], at: usize) -> AnalyzeResult<Analyzed> {
        let Some(raw) = tokens.get(at) else {
            return Err(ParseError::Unterminated(Construct::Call).into());
        };
        let token = raw.to_lowercase();
        let next = at + 1;
        trace!(token = %token, at, "analyze");

        if token.starts_with(|c: char| c.is_ascii_digit()) {
            Ok((Some(Node::Literal(parse_number(&token)?)), next))
        } else {
            match token.as_str() {
                "\"" => analyze_string(tokens, next),
                "[" => self.analyze_list(tokens, next),
                "(" => self.analyze_group(tokens, next),
                _ => match self.keywords.role_of(&token) {
                    Some(Role::If) => self.analyze_if(tokens, next),
                    Some(Role::Loop) => self.analyze_loop(tokens, next),
                    Some(Role::While) => self.analyze_while(tokens, next),
                    Some(Role::DefProc) => Ok((None, self.analyze_procedure(tokens, next)?)),
                    Some(Role::MakeVar) => Ok((None, self.analyze_make(tokens, next)?)),
                    Some(Role::EndProc | Role::Else) | None => {
                        self.analyze_word(token, tokens, next)
                    }
                },
            }
        }
    }

    /// Analyze a sub-expression that must exist and must produce a value.
    fn analyze_required(
        &mut self,
        tokens: &[String],
        at: usize,
        construct: Construct,
    ) -> AnalyzeResult<(Node, usize)> {
        if at >= tokens.len() {
            return Err(ParseError::Unterminated(construct).into());
        }
        match self.analyze(tokens, at)? {
            (Some(node), next) => Ok((node, next)),
            (None, _) => Err(ParseError::ExpectedExpression { construct }.into()),
        }
    }

    fn analyze_argument(&mut self, tokens: &[String], at: usize) -> AnalyzeResult<(Node, usize)> {
        if at >= tokens.len() {
            return Err(ParseError::Unterminated(Construct::Call).into());
        }
        match self.nested(|this| this.analyze_primary(tokens, at))? {
            (Some(node), next) => Ok((node, next)),
            (None, _) => Err(ParseError::ExpectedExpression {
                construct: Construct::Call,
            }
            .into()),
        }
    }

    fn analyze_infix(&mut self, left: Node, tokens: &[String], at: usize) -> AnalyzeResult<Analyzed> {
        let Some(op) = tokens.get(at).and_then(|token| InfixOp::from_token(token)) else {
            return Ok((Some(left), at));
        };
        let (right, next) = self.analyze_required(tokens, at + 1, Construct::Operator)?;
        // A procedure defined under the operator's symbol replaces the
        // built-in operator in infix position too.
        let node = match self.env.get(op.as_symbol()) {
            Some(Value::Callable(callee @ Callable::Procedure(_))) if callee.arity() == 2 => {
                Node::Call {
                    callee,
                    args: vec![left, right],
                }
            }
            _ => Node::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        };
        Ok((Some(node), next))
    }

    fn analyze_list(&mut self, tokens: &[String], mut at: usize) -> AnalyzeResult<Analyzed> {
        let mut items = Vec::new();
        loop {
            match tokens.get(at) {
                None => return Err(ParseError::Unterminated(Construct::List).into()),
                Some(token) if token == "]" => return Ok((Some(Node::List(items)), at + 1)),
                Some(_) => {
                    let (item, next) = self.analyze(tokens, at)?;
                    items.extend(item);
                    at = next;
                }
            }
        }
    }

    fn analyze_group(&mut self, tokens: &[String], at: usize) -> AnalyzeResult<Analyzed> {
        let (inner, at) = self.analyze_required(tokens, at, Construct::Group)?;
        match tokens.get(at) {
            Some(token) if token == ")" => Ok((Some(inner), at + 1)),
            Some(token) => Err(ParseError::UnclosedGroup {
                found: token.clone(),
            }
            .into()),
            None => Err(ParseError::Unterminated(Construct::Group).into()),
        }
    }

    fn analyze_if(&mut self, tokens: &[String], at: usize) -> AnalyzeResult<Analyzed> {
        let (condition, at) = self.analyze_required(tokens, at, Construct::Conditional)?;
        let (consequence, at) = self.analyze_required(tokens, at, Construct::Conditional)?;
        let (alternate, at) = match tokens.get(at) {
            Some(token) if self.keywords.is(Role::Else, token) => {
                self.analyze_required(tokens, at + 1, Construct::Conditional)?
            }
            _ => (Node::unit(), at),
        };
        let node = Node::If {
            condition: Box::new(condition),
            consequence: Box::new(consequence),
            alternate: Box::new(alternate),
        };
        Ok((Some(node), at))
    }

    fn analyze_loop(&mut self, tokens: &[String], at: usize) -> AnalyzeResult<Analyzed> {
        let (count, at) = self.analyze_required(tokens, at, Construct::Loop)?;
        let (body, at) = self.analyze_required(tokens, at, Construct::Loop)?;
        let node = Node::Loop {
            count: Box::new(count),
            body: Box::new(body),
        };
        Ok((Some(node), at))
    }

    fn analyze_while(&mut self, tokens: &[String], at: usize) -> AnalyzeResult<Analyzed> {
        let (condition, at) = self.analyze_required(tokens, at, Construct::While)?;
        let (body, at) = self.analyze_required(tokens, at, Construct::While)?;
        let node = Node::While {
            condition: Box::new(condition),
            body: Box::new(body),
        };
        Ok((Some(node), at))
    }

    /// `pour name :p1 :p2 ... body fin`
    ///
    /// The name is bound before the body is analyzed so that the body can
    /// call the procedure recursively.
    fn analyze_procedure(&mut self, tokens: &[String], at: usize) -> AnalyzeResult<usize> {
        let name = tokens
            .get(at)
            .ok_or(ParseError::Unterminated(Construct::Procedure))?
            .to_lowercase();
        let mut at = at + 1;

        let mut params = Vec::new();
        while let Some(token) = tokens.get(at) {
            if !token.starts_with(PARAM_SIGIL) {
                break;
            }
            params.push(token.to_lowercase());
            at += 1;
        }

        let procedure = Rc::new(Procedure::new(name.clone(), params, self.env.clone()));
        self.env.define(
            name.clone(),
            Value::Callable(Callable::Procedure(Rc::clone(&procedure))),
        );

        self.enclosing.push(Vec::new());
        let body = self.analyze_body(tokens, at);
        let nested = self.enclosing.pop().unwrap_or_default();
        let (body, at) = body?;

        procedure.finish(Node::block(body), nested);
        if let Some(outer) = self.enclosing.last_mut() {
            outer.push(procedure);
        }
        debug!(procedure = %name, "defined procedure");
        Ok(at)
    }

    fn analyze_body(&mut self, tokens: &[String], mut at: usize) -> AnalyzeResult<(Vec<Node>, usize)> {
        let mut nodes = Vec::new();
        loop {
            let token = tokens
                .get(at)
                .ok_or(ParseError::Unterminated(Construct::Procedure))?;
            if self.keywords.is(Role::EndProc, token) {
                return Ok((nodes, at + 1));
            }
            let (node, next) = self.analyze(tokens, at)?;
            nodes.extend(node);
            at = next;
        }
    }

    /// `donne name value`
    ///
    /// The value is executed right away against the analyzer's environment,
    /// not when the surrounding code runs.
    fn analyze_make(&mut self, tokens: &[String], at: usize) -> AnalyzeResult<usize> {
        let name = tokens
            .get(at)
            .ok_or(ParseError::Unterminated(Construct::Variable))?
            .to_lowercase();
        let (value, next) = self.analyze_required(tokens, at + 1, Construct::Variable)?;
        let value = execute(&value, self.env)?;
        debug!(variable = %name, %value, "defined variable");
        self.env.define(name, value);
        Ok(next)
    }

    fn analyze_word(&mut self, token: String, tokens: &[String], at: usize) -> AnalyzeResult<Analyzed> {
        if let Some(Value::Callable(callee)) = self.env.get(&token) {
            trace!(callee = %token, arity = callee.arity(), "call");
            let mut args = Vec::with_capacity(callee.arity());
            let mut at = at;
            for _ in 0..callee.arity() {
                let (arg, next) = self.analyze_argument(tokens, at)?;
                args.push(arg);
                at = next;
            }
            return Ok((Some(Node::Call { callee, args }), at));
        }
        Ok((Some(Node::VarRef(token)), at))
    }
}

/// `" word word ... "`, joined with single spaces, original case kept.
fn analyze_string(tokens: &[String], at: usize) -> AnalyzeResult<Analyzed> {
    let Some(len) = tokens[at.min(tokens.len())..]
        .iter()
        .position(|token| token == "\"")
    else {
        return Err(ParseError::Unterminated(Construct::String).into());
    };
    let text = tokens[at..at + len].join(" ");
    Ok((Some(Node::Literal(Value::string(text))), at + len + 1))
}

fn parse_number(token: &str) -> Result<Value, ParseError> {
    if let Ok(n) = token.parse::<i64>() {
        return Ok(Value::Int(n));
    }
    token
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
mod tests;
