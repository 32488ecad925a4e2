// ABOUTME: Builder collecting a type's name, bases, members and implemented interfaces.
// ABOUTME: The registry validates it and assembles the final TypeDef in one step.

use super::{Member, TypeDef, TypeRef};
use crate::descriptor::{ForwardingAccessor, PlaceholderAttribute};
use crate::error::Result;
use crate::interface::CapabilityInterface;
use crate::object::Object;
use crate::registry::Registry;
use crate::resolve::Resolve;
use crate::types::TypeId;
use crate::value::{NativeMethod, Value};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Members are recorded unbound; accessors learn their owner and attribute
/// name when the type is assembled.
enum Pending {
    Value(Value),
    Method(NativeMethod),
    Placeholder,
    Forward { field: String, writable: bool },
}

#[must_use = "a TypeBuilder does nothing until built"]
pub struct TypeBuilder {
    name: String,
    bases: Vec<TypeRef>,
    members: Vec<(String, Pending)>,
    interfaces: Vec<CapabilityInterface>,
    fallback: Option<Arc<dyn Resolve>>,
}

impl TypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            members: Vec::new(),
            interfaces: Vec::new(),
            fallback: None,
        }
    }

    /// Append a base. Declared order is the order bases are added.
    pub fn base(mut self, base: &TypeRef) -> Self {
        self.bases.push(Arc::clone(base));
        self
    }

    pub fn bases<'a>(mut self, bases: impl IntoIterator<Item = &'a TypeRef>) -> Self {
        self.bases.extend(bases.into_iter().cloned());
        self
    }

    /// A plain stored value.
    pub fn value(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.member(name, Pending::Value(value.into()))
    }

    pub fn method<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.member(name, Pending::Method(NativeMethod::new(f)))
    }

    /// Declare `name` as required without providing it.
    pub fn placeholder(self, name: impl Into<String>) -> Self {
        self.member(name, Pending::Placeholder)
    }

    /// Forward reads, writes and deletes of `name` to `instance.<field>.<name>`.
    pub fn forward(self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.member(
            name,
            Pending::Forward {
                field: field.into(),
                writable: true,
            },
        )
    }

    /// Forward reads only; writes land on the instance and shadow the accessor.
    pub fn forward_read_only(self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.member(
            name,
            Pending::Forward {
                field: field.into(),
                writable: false,
            },
        )
    }

    /// Catch-all resolver for names nothing else defines.
    pub fn fallback<F>(self, f: F) -> Self
    where
        F: Fn(&Object, &str) -> Option<Value> + Send + Sync + 'static,
    {
        self.resolver(f)
    }

    pub fn resolver(mut self, resolver: impl Resolve + 'static) -> Self {
        self.fallback = Some(Arc::new(resolver));
        self
    }

    /// Install placeholders for every name of `interface` the type does not
    /// define itself. Explicit members always win, whatever the call order.
    pub fn implements(mut self, interface: &CapabilityInterface) -> Self {
        self.interfaces.push(interface.clone());
        self
    }

    pub fn build(self, registry: &Registry) -> Result<TypeRef> {
        registry.define(self)
    }

    fn member(mut self, name: impl Into<String>, pending: Pending) -> Self {
        self.members.push((name.into(), pending));
        self
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn declared_bases(&self) -> &[TypeRef] {
        &self.bases
    }

    /// Every attribute name the finished type will carry in its own table.
    pub(crate) fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(name, _)| name.as_str()).chain(
            self.interfaces
                .iter()
                .flat_map(|i| i.names().iter().map(String::as_str)),
        )
    }

    pub(crate) fn assemble(self, ancestors: Vec<TypeRef>) -> TypeRef {
        let id = TypeId::fresh();
        let mut members = BTreeMap::new();

        for (name, pending) in self.members {
            let member = match pending {
                Pending::Value(value) => Member::Value(value),
                Pending::Method(method) => Member::Method(method),
                Pending::Placeholder => {
                    Member::Placeholder(PlaceholderAttribute::bind(id, &self.name, &name))
                }
                Pending::Forward { field, writable } => {
                    Member::Forward(ForwardingAccessor::bind(&name, &field, writable))
                }
            };
            members.insert(name, member);
        }

        for name in self.interfaces.iter().flat_map(|i| i.names()) {
            if !members.contains_key(name) {
                let placeholder = PlaceholderAttribute::bind(id, &self.name, name);
                members.insert(name.clone(), Member::Placeholder(placeholder));
            }
        }

        Arc::new(TypeDef {
            id,
            name: self.name,
            bases: self.bases,
            ancestors,
            members: RwLock::new(members),
            fallback: self.fallback,
            sealed: AtomicBool::new(false),
        })
    }
}

impl fmt::Debug for TypeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeBuilder")
            .field("name", &self.name)
            .field(
                "bases",
                &self.bases.iter().map(|b| b.name()).collect::<Vec<_>>(),
            )
            .field("members", &self.members.len())
            .finish()
    }
}
