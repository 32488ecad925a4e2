// ABOUTME: Instances of runtime types and the attribute lookup algorithm.
// ABOUTME: Data accessors, then own slots, then type members, then the fallback resolver.

use crate::error::{AttributeError, AttributeMissing, Result};
use crate::typedef::{TypeDef, TypeRef};
use crate::types::ObjectId;
use crate::value::Value;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Outcome of an attribute read: a value, a missing attribute, or a
/// declared-but-unimplemented attribute.
pub type Resolution = std::result::Result<Value, AttributeError>;

/// A shared handle to an instance. Clones refer to the same instance.
#[derive(Clone)]
pub struct Object(Arc<ObjectInner>);

struct ObjectInner {
    id: ObjectId,
    ty: TypeRef,
    slots: RwLock<HashMap<String, Value>>,
}

impl Object {
    /// Instantiate `ty` with no attributes of its own.
    pub fn new(ty: &TypeRef) -> Self {
        Self::with_slots(ty, std::iter::empty::<(String, Value)>())
    }

    /// Instantiate `ty`, seeding the instance's own attribute slots.
    pub fn with_slots<I, K, V>(ty: &TypeRef, slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let slots = slots
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self(Arc::new(ObjectInner {
            id: ObjectId::fresh(),
            ty: Arc::clone(ty),
            slots: RwLock::new(slots),
        }))
    }

    pub fn id(&self) -> ObjectId {
        self.0.id
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.0.ty
    }

    /// Identity comparison.
    pub fn same(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn is_instance(&self, ty: &TypeDef) -> bool {
        self.0.ty.is_subtype_of(ty)
    }

    /// Read one of the instance's own slots, ignoring the type entirely.
    pub fn own_slot(&self, name: &str) -> Option<Value> {
        self.0.slots.read().get(name).cloned()
    }

    pub fn try_get(&self, name: &str) -> Resolution {
        let member = self.0.ty.lookup(name);

        if let Some(member) = &member
            && member.is_data()
        {
            return member.bind(self);
        }

        if let Some(value) = self.own_slot(name) {
            return Ok(value);
        }

        match member {
            Some(member) => member.bind(self),
            None => self
                .fallback(name)
                .ok_or_else(|| AttributeMissing::on_instance(self.0.ty.name(), name).into()),
        }
    }

    pub fn getattr(&self, name: &str) -> Result<Value> {
        Ok(self.try_get(name)?)
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
        if let Some(member) = self.0.ty.lookup(name)
            && let Some(accessor) = member.as_data_accessor()
        {
            return accessor.set(self, value);
        }

        self.0.slots.write().insert(name.to_string(), value);
        Ok(())
    }

    pub fn delattr(&self, name: &str) -> Result<()> {
        if let Some(member) = self.0.ty.lookup(name)
            && let Some(accessor) = member.as_data_accessor()
        {
            return accessor.delete(self);
        }

        match self.0.slots.write().remove(name) {
            Some(_) => Ok(()),
            None => Err(AttributeMissing::on_instance(self.0.ty.name(), name).into()),
        }
    }

    /// Ask the first fallback resolver in the type's resolution order.
    pub(crate) fn fallback(&self, name: &str) -> Option<Value> {
        let resolver = self.0.ty.fallback_resolver()?;
        let value = resolver.resolve(self, name);
        if value.is_some() {
            tracing::trace!(attribute = name, ty = self.0.ty.name(), "resolved via fallback");
        }
        value
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("id", &self.0.id)
            .field("type", &self.0.ty.name())
            .finish()
    }
}
