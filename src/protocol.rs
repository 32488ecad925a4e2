// ABOUTME: Operator-style protocols dispatched through special hook names.
// ABOUTME: Hooks are looked up on the type only, never the instance's own slots.

use crate::error::{Error, Result};
use crate::value::Value;

/// Hook name consulted by [`length`].
pub const LENGTH_HOOK: &str = "__len__";

/// Length of a string, list, or object whose type provides `__len__`.
///
/// The hook is bound like any other member, so a forwarding accessor
/// attached under `__len__` forwards the length of its target.
pub fn length(value: &Value) -> Result<usize> {
    match value {
        Value::Str(s) => Ok(s.chars().count()),
        Value::List(items) => Ok(items.len()),
        Value::Object(obj) => {
            let hook = obj
                .type_ref()
                .lookup(LENGTH_HOOK)
                .ok_or_else(|| Error::TypeMismatch {
                    expected: "value with a length",
                    found: value.type_name(),
                })?;
            let result = hook.bind(obj)?.call(&[])?;
            match result {
                Value::Int(n) => usize::try_from(n).map_err(|_| Error::TypeMismatch {
                    expected: "non-negative length",
                    found: n.to_string(),
                }),
                other => Err(Error::TypeMismatch {
                    expected: "integer length",
                    found: other.type_name(),
                }),
            }
        }
        other => Err(Error::TypeMismatch {
            expected: "value with a length",
            found: other.type_name(),
        }),
    }
}
