// ABOUTME: The catch-all resolver a type may carry for names nothing else defines.
// ABOUTME: Consulted last by instance lookup and by placeholders before they give up.

use crate::object::Object;
use crate::value::Value;

/// Last-resort attribute lookup for instances of a type.
///
/// Return `None` when the name is not handled; the caller then reports the
/// attribute as missing (or, behind a placeholder, as a contract violation).
pub trait Resolve: Send + Sync {
    fn resolve(&self, instance: &Object, name: &str) -> Option<Value>;
}

impl<F> Resolve for F
where
    F: Fn(&Object, &str) -> Option<Value> + Send + Sync,
{
    fn resolve(&self, instance: &Object, name: &str) -> Option<Value> {
        self(instance, name)
    }
}
