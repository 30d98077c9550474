//! Lexical scopes.
//!
//! A scope is a table of bindings plus an optional parent. Lookups walk
//! outward through parents; writes always land in the scope they are made
//! on, so a binding in an inner scope shadows the outer one instead of
//! changing it.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::Value;

/// Shared, mutable handle to a scope.
///
/// Closures keep a clone of the handle for their defining scope, so that
/// scope outlives the call that created it and later bindings made on it
/// are visible to the closure. Single-threaded by construction.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether two handles refer to the same scope.
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

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope of bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a scope with no parent: a global scope.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Whether `name` is bound here or in any parent.
    pub fn has(&self, name: &str) -> bool {
        if self.bindings.contains_key(name) {
            return true;
        }
        match &self.parent {
            Some(parent) => parent.borrow().has(name),
            None => false,
        }
    }

    /// Look `name` up here, then in each parent in turn.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.borrow().get(name)
    }

    /// Bind `name` in this scope. An existing local binding is overwritten.
    #[inline]
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Whether `name` is bound in this scope itself.
    #[inline]
    pub fn has_local(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    #[inline]
    pub fn parent(&self) -> Option<&LocalScope<Scope>> {
        self.parent.as_ref()
    }

    #[inline]
    pub fn is_global(&self) -> bool {
        self.parent.is_none()
    }

    /// Drop every local binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

impl LocalScope<Scope> {
    /// The outermost scope of this chain.
    pub fn global(&self) -> LocalScope<Scope> {
        let mut current = self.clone();
        loop {
            let parent = current.borrow().parent().cloned();
            match parent {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }

    /// A fresh child scope of this one.
    pub fn child(&self) -> LocalScope<Scope> {
        LocalScope::new(Scope::with_parent(self.clone()))
    }
}
