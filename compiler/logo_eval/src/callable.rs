//! Callables: host primitives and user procedures.
//!
//! Both kinds have a fixed arity. The analyzer consumes exactly that many
//! argument expressions at each call site, so dispatch never re-checks the
//! argument count.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::environment::Environment;
use crate::errors::ProgramResult;
use crate::exec::execute;
use crate::node::Node;
use crate::value::Value;

/// Signature of a host function wrapped by a [`Primitive`].
pub type NativeFn = dyn Fn(&[Value]) -> ProgramResult<Value>;

/// A fixed-arity callable backed by a host function.
pub struct Primitive {
    name: Option<String>,
    arity: usize,
    func: Box<NativeFn>,
}

impl Primitive {
    pub fn new(arity: usize, func: impl Fn(&[Value]) -> ProgramResult<Value> + 'static) -> Self {
        Primitive {
            name: None,
            arity,
            func: Box::new(func),
        }
    }

    /// A primitive carrying a display name, used in messages and tracing.
    pub fn named(
        name: impl Into<String>,
        arity: usize,
        func: impl Fn(&[Value]) -> ProgramResult<Value> + 'static,
    ) -> Self {
        Primitive {
            name: Some(name.into()),
            arity,
            func: Box::new(func),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn call(&self, args: &[Value]) -> ProgramResult<Value> {
        (self.func)(args)
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Primitive")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A user-defined procedure.
///
/// Built in two phases. The analyzer binds the procedure under its name
/// with a Unit body as soon as the header is read, so the body can call
/// itself recursively; [`Procedure::finish`] then fills the body slot.
pub struct Procedure {
    name: String,
    params: Vec<String>,
    body: RefCell<Rc<Node>>,
    /// Environment new invocation frames are parented to.
    closure: RefCell<Environment>,
    /// Procedures defined inside this one's body.
    nested: RefCell<Vec<Rc<Procedure>>>,
}

impl Procedure {
    pub fn new(name: impl Into<String>, params: Vec<String>, closure: Environment) -> Self {
        Procedure {
            name: name.into(),
            params,
            body: RefCell::new(Rc::new(Node::unit())),
            closure: RefCell::new(closure),
            nested: RefCell::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Fill the body slot once the definition has been analyzed.
    pub fn finish(&self, body: Node, nested: Vec<Rc<Procedure>>) {
        *self.body.borrow_mut() = Rc::new(body);
        *self.nested.borrow_mut() = nested;
    }

    /// Invoke with already-evaluated arguments.
    ///
    /// A fresh frame binding the parameters is parented to the procedure's
    /// closure. Procedures nested in this one see that frame as their
    /// closure until the invocation returns.
    #[tracing::instrument(level = "debug", skip_all, fields(procedure = %self.name))]
    pub fn call(&self, args: Vec<Value>) -> ProgramResult<Value> {
        let frame = self.closure.borrow().child();
        for (param, arg) in self.params.iter().zip(args) {
            frame.define(param.clone(), arg);
        }

        let nested = self.nested.borrow().clone();
        let _captured = CapturedFrame::enter(nested, &frame);
        let body = self.body.borrow().clone();
        execute(&body, &frame)
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Procedure")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Points nested procedures at an invocation frame, restoring their
/// previous closures on drop (including unwinding on error).
struct CapturedFrame {
    saved: Vec<(Rc<Procedure>, Environment)>,
}

impl CapturedFrame {
    fn enter(nested: Vec<Rc<Procedure>>, frame: &Environment) -> Self {
        let saved = nested
            .into_iter()
            .map(|procedure| {
                let previous = procedure.closure.replace(frame.clone());
                (procedure, previous)
            })
            .collect();
        CapturedFrame { saved }
    }
}

impl Drop for CapturedFrame {
    fn drop(&mut self) {
        for (procedure, previous) in self.saved.drain(..).rev() {
            *procedure.closure.borrow_mut() = previous;
        }
    }
}

/// Either kind of callable.
#[derive(Clone, Debug)]
pub enum Callable {
    Primitive(Rc<Primitive>),
    Procedure(Rc<Procedure>),
}

impl Callable {
    pub fn arity(&self) -> usize {
        match self {
            Callable::Primitive(p) => p.arity(),
            Callable::Procedure(p) => p.arity(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Callable::Primitive(p) => p.name(),
            Callable::Procedure(p) => Some(p.name()),
        }
    }

    /// Dispatch with exactly `arity` evaluated arguments.
    pub fn call(&self, args: Vec<Value>) -> ProgramResult<Value> {
        match self {
            Callable::Primitive(p) => p.call(&args),
            Callable::Procedure(p) => p.call(args),
        }
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        match (self, other) {
            (Callable::Primitive(a), Callable::Primitive(b)) => Rc::ptr_eq(a, b),
            (Callable::Procedure(a), Callable::Procedure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Primitive> for Callable {
    fn from(primitive: Primitive) -> Self {
        Callable::Primitive(Rc::new(primitive))
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Callable::Primitive(_) => "primitive",
            Callable::Procedure(_) => "procedure",
        };
        match self.name() {
            Some(name) => write!(f, "<{kind} {name}/{}>", self.arity()),
            None => write!(f, "<{kind}/{}>", self.arity()),
        }
    }
}
