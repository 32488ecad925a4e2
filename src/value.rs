// ABOUTME: Dynamic values flowing through attribute reads and writes.
// ABOUTME: Also defines native methods and methods bound to a receiver.

use crate::error::{AttributeError, AttributeMissing, Error, Result};
use crate::interface::CapabilityInterface;
use crate::object::{Object, Resolution};
use std::fmt;
use std::sync::Arc;

type MethodFn = dyn Fn(&Object, &[Value]) -> Result<Value> + Send + Sync;

/// A method implemented in Rust and stored in a type's attribute table.
#[derive(Clone)]
pub struct NativeMethod(Arc<MethodFn>);

impl NativeMethod {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NativeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeMethod")
    }
}

/// A native method read through an instance, carrying that instance along.
#[derive(Debug, Clone)]
pub struct BoundMethod {
    receiver: Object,
    method: NativeMethod,
}

impl BoundMethod {
    pub(crate) fn new(receiver: Object, method: NativeMethod) -> Self {
        Self { receiver, method }
    }

    pub fn receiver(&self) -> &Object {
        &self.receiver
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.method.0)(&self.receiver, args)
    }
}

#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<Value>),
    Object(Object),
    Interface(CapabilityInterface),
    Method(BoundMethod),
}

impl Value {
    /// Short lowercase name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Object(_) => "object",
            Value::Interface(_) => "interface",
            Value::Method(_) => "method",
        }
    }

    /// The runtime type name for objects, the variant kind otherwise.
    pub fn type_name(&self) -> String {
        match self {
            Value::Object(obj) => obj.type_ref().name().to_string(),
            other => other.kind().to_string(),
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Three-way attribute read. Only objects carry attributes.
    pub fn try_get(&self, name: &str) -> Resolution {
        match self {
            Value::Object(obj) => obj.try_get(name),
            other => Err(AttributeMissing::on_value(other.kind(), name).into()),
        }
    }

    pub fn getattr(&self, name: &str) -> Result<Value> {
        self.try_get(name).map_err(Error::from)
    }

    /// `false` only when the attribute is missing; a contract violation propagates.
    pub fn hasattr(&self, name: &str) -> Result<bool> {
        match self.try_get(name) {
            Ok(_) => Ok(true),
            Err(AttributeError::Missing(_)) => Ok(false),
            Err(AttributeError::ContractViolation(e)) => Err(e.into()),
        }
    }

    pub fn setattr(&self, name: &str, value: Value) -> Result<()> {
        match self {
            Value::Object(obj) => obj.setattr(name, value),
            other => Err(AttributeMissing::on_value(other.kind(), name).into()),
        }
    }

    pub fn delattr(&self, name: &str) -> Result<()> {
        match self {
            Value::Object(obj) => obj.delattr(name),
            other => Err(AttributeMissing::on_value(other.kind(), name).into()),
        }
    }

    /// Call a bound method.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        match self {
            Value::Method(method) => method.call(args),
            other => Err(Error::TypeMismatch {
                expected: "callable",
                found: other.type_name(),
            }),
        }
    }
}

/// Objects compare by identity, methods by receiver and implementation.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.same(b),
            (Value::Interface(a), Value::Interface(b)) => a == b,
            (Value::Method(a), Value::Method(b)) => {
                a.receiver.same(&b.receiver) && a.method.same(&b.method)
            }
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<&Object> for Value {
    fn from(obj: &Object) -> Self {
        Value::Object(obj.clone())
    }
}

impl From<CapabilityInterface> for Value {
    fn from(interface: CapabilityInterface) -> Self {
        Value::Interface(interface)
    }
}

impl From<&CapabilityInterface> for Value {
    fn from(interface: &CapabilityInterface) -> Self {
        Value::Interface(interface.clone())
    }
}
