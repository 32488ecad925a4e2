// ABOUTME: Runtime type descriptors: name, bases, resolution order and attribute table.
// ABOUTME: Type-level reads return members as stored, so descriptors stay introspectable.

mod builder;
pub(crate) mod linearize;

pub use builder::TypeBuilder;

use crate::descriptor::{Descriptor, ForwardingAccessor, PlaceholderAttribute};
use crate::error::{AttributeMissing, Result};
use crate::object::{Object, Resolution};
use crate::resolve::Resolve;
use crate::types::TypeId;
use crate::value::{BoundMethod, NativeMethod, Value};
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub type TypeRef = Arc<TypeDef>;

/// One entry in a type's own attribute table.
#[derive(Debug, Clone)]
pub enum Member {
    Value(Value),
    Method(NativeMethod),
    Placeholder(PlaceholderAttribute),
    Forward(ForwardingAccessor),
}

impl Member {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Member::Placeholder(_))
    }

    pub fn as_placeholder(&self) -> Option<&PlaceholderAttribute> {
        match self {
            Member::Placeholder(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_forward(&self) -> Option<&ForwardingAccessor> {
        match self {
            Member::Forward(f) => Some(f),
            _ => None,
        }
    }

    pub(crate) fn is_data(&self) -> bool {
        self.as_data_accessor().is_some()
    }

    pub(crate) fn as_data_accessor(&self) -> Option<&ForwardingAccessor> {
        self.as_forward().filter(|f| f.is_data())
    }

    /// Produce the value this member yields when read through `instance`.
    pub(crate) fn bind(&self, instance: &Object) -> Resolution {
        match self {
            Member::Value(value) => Ok(value.clone()),
            Member::Method(method) => Ok(Value::Method(BoundMethod::new(
                instance.clone(),
                method.clone(),
            ))),
            Member::Placeholder(placeholder) => placeholder.get(instance),
            Member::Forward(accessor) => accessor.get(instance),
        }
    }
}

pub struct TypeDef {
    id: TypeId,
    name: String,
    bases: Vec<TypeRef>,
    /// Linearized ancestors, excluding the type itself.
    ancestors: Vec<TypeRef>,
    members: RwLock<BTreeMap<String, Member>>,
    fallback: Option<Arc<dyn Resolve>>,
    /// One-way flag; once set, no type may list this one as a base.
    sealed: AtomicBool,
}

impl TypeDef {
    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    /// Set the sealed flag. Returns whether it was newly set.
    pub(crate) fn mark_sealed(&self) -> bool {
        !self.sealed.swap(true, Ordering::AcqRel)
    }

    pub fn bases(&self) -> &[TypeRef] {
        &self.bases
    }

    /// The type itself followed by its linearized ancestors.
    pub fn mro(&self) -> impl Iterator<Item = &TypeDef> {
        std::iter::once(self).chain(self.ancestors.iter().map(|t| &**t))
    }

    pub fn mro_names(&self) -> Vec<&str> {
        self.mro().map(TypeDef::name).collect()
    }

    pub fn is_subtype_of(&self, other: &TypeDef) -> bool {
        self.mro().any(|t| t.id == other.id)
    }

    /// Whether the type's own table (not its ancestors) defines `name`.
    pub fn defines(&self, name: &str) -> bool {
        self.members.read().contains_key(name)
    }

    pub fn own_member(&self, name: &str) -> Option<Member> {
        self.members.read().get(name).cloned()
    }

    /// First definition of `name` along the resolution order.
    pub fn lookup(&self, name: &str) -> Option<Member> {
        self.mro().find_map(|t| t.own_member(name))
    }

    /// Type-level read: the member itself, descriptors included.
    pub fn getattr(&self, name: &str) -> Result<Member> {
        self.lookup(name)
            .ok_or_else(|| AttributeMissing::on_type(&self.name, name).into())
    }

    /// First non-placeholder definition of `name` strictly after `declaring`
    /// in this type's resolution order.
    pub(crate) fn lookup_concrete_after(&self, declaring: TypeId, name: &str) -> Option<Member> {
        self.mro()
            .skip_while(|t| t.id != declaring)
            .skip(1)
            .filter_map(|t| t.own_member(name))
            .find(|m| !m.is_placeholder())
    }

    pub(crate) fn fallback_resolver(&self) -> Option<&Arc<dyn Resolve>> {
        self.mro().find_map(|t| t.fallback.as_ref())
    }

    /// Names still owed by this type: placeholders reached by lookup with no
    /// concrete definition behind them.
    pub fn required_attributes(&self) -> Vec<String> {
        let names: BTreeSet<String> = self
            .mro()
            .flat_map(|t| t.members.read().keys().cloned().collect::<Vec<_>>())
            .collect();

        names
            .into_iter()
            .filter(|name| match self.lookup(name) {
                Some(Member::Placeholder(p)) => {
                    self.lookup_concrete_after(p.declaring_id(), name).is_none()
                }
                _ => false,
            })
            .collect()
    }

    /// Install a placeholder for `name` unless the own table already has an
    /// entry. Returns whether anything was installed.
    pub(crate) fn install_placeholder(&self, name: &str) -> bool {
        let mut members = self.members.write();
        if members.contains_key(name) {
            return false;
        }
        members.insert(
            name.to_string(),
            Member::Placeholder(PlaceholderAttribute::bind(self.id, &self.name, name)),
        );
        true
    }
}

impl fmt::Debug for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDef")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("mro", &self.mro_names())
            .finish()
    }
}
