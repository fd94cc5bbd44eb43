//! Lexically chained environments.
//!
//! Every frame holds a shared reference to its parent, so a frame stays
//! alive as long as any child frame or procedure closure still points at
//! it. Lookup walks outward and the first match wins; `define` only ever
//! touches the local frame.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::errors::{ProgramError, ProgramResult};
use crate::value::Value;

/// A single-threaded shared cell for frames.
///
/// All frame allocations go through [`LocalScope::new`]. The runtime is
/// single-threaded, so `Rc` rather than `Arc`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one frame plus the link to the enclosing frame.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

/// Handle to a frame. Cloning shares the frame.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// An empty root frame.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// A new empty frame whose parent is `self`.
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(self.clone()),
            }),
        }
    }

    pub fn parent(&self) -> Option<Environment> {
        self.scope.borrow().parent.clone()
    }

    /// Look a name up through the whole chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut frame = self.clone();
        loop {
            let parent = {
                let scope = frame.scope.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                scope.parent.clone()
            };
            frame = parent?;
        }
    }

    /// Like [`Environment::get`], failing with `UnknownIdentifier`.
    pub fn lookup(&self, name: &str) -> ProgramResult<Value> {
        self.get(name)
            .ok_or_else(|| ProgramError::UnknownIdentifier(name.to_string()))
    }

    /// Bind `name` in this frame, overwriting any local binding.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.scope.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Whether `name` is bound anywhere in the chain.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether `name` is bound in this frame itself.
    pub fn contains_local(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    /// Every name visible from this frame, sorted.
    pub fn all_keys(&self) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        let mut frame = Some(self.clone());
        while let Some(current) = frame {
            let scope = current.scope.borrow();
            keys.extend(scope.bindings.keys().cloned());
            frame = scope.parent.clone();
        }
        keys
    }

    /// Number of frames from this one up to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut frame = self.parent();
        while let Some(current) = frame {
            depth += 1;
            frame = current.parent();
        }
        depth
    }

    /// Frame identity.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames can reach values that reach frames again (procedure closures),
/// so only the local names are printed.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<&String> = scope.bindings.keys().collect();
        names.sort();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}
