//! Context passing and callback props

use std::fmt;
use std::sync::Arc;

use crate::events::DocumentListeners;

/// Context passed to components on creation
///
/// Carries the handles a component needs to reach outside its own subtree.
/// Cloning is cheap; every clone shares the same document listener registry.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// Document-level pointer listener registry
    document: DocumentListeners,
}

impl Context {
    /// Create a new context with a fresh document registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context bound to an existing document registry
    pub fn with_document(document: DocumentListeners) -> Self {
        Self { document }
    }

    /// Get the document listener registry
    pub fn document(&self) -> &DocumentListeners {
        &self.document
    }
}

/// A callback function that can be passed as a prop
pub struct Callback<Args, Ret = ()> {
    /// The function to call
    func: Arc<dyn Fn(Args) -> Ret + Send + Sync>,
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
        }
    }
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl<Args, Ret> Callback<Args, Ret> {
    /// Create a new callback
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Args) -> Ret + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Call the callback with the given arguments
    pub fn call(&self, args: Args) -> Ret {
        (self.func)(args)
    }
}

/// Convenience function for creating a callback
pub fn callback<F, Args, Ret>(func: F) -> Callback<Args, Ret>
where
    F: Fn(Args) -> Ret + Send + Sync + 'static,
{
    Callback::new(func)
}
