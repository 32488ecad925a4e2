// ABOUTME: Accessor that forwards an attribute to the same-named attribute of a held sub-object.
// ABOUTME: Get, set and delete resolve the sub-object through a field on the instance.

use super::{Descriptor, sealed};
use crate::error::Result;
use crate::object::{Object, Resolution};
use crate::value::Value;
use std::sync::Arc;

/// Delegates `instance.<name>` to `instance.<field>.<name>`.
///
/// The forwarded name is the name the accessor was attached under, fixed at
/// type definition. Operator hooks such as `__len__` forward like any other
/// name. Failures reading `instance.<field>` propagate unchanged.
#[derive(Debug, Clone)]
pub struct ForwardingAccessor {
    name: Arc<str>,
    field: Arc<str>,
    writable: bool,
}

impl ForwardingAccessor {
    pub(crate) fn bind(name: &str, field: &str, writable: bool) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            writable,
        }
    }

    /// The instance field holding the delegate target.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Whether writes and deletes are forwarded. A read-only accessor lets
    /// writes land in the instance's own slots, where they shadow it.
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    fn target(&self, instance: &Object) -> Resolution {
        instance.try_get(&self.field)
    }

    pub(crate) fn set(&self, instance: &Object, value: Value) -> Result<()> {
        self.target(instance)?.setattr(&self.name, value)
    }

    pub(crate) fn delete(&self, instance: &Object) -> Result<()> {
        self.target(instance)?.delattr(&self.name)
    }
}

impl sealed::Sealed for ForwardingAccessor {}

impl Descriptor for ForwardingAccessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, instance: &Object) -> Resolution {
        self.target(instance)?.try_get(&self.name)
    }

    fn is_data(&self) -> bool {
        self.writable
    }
}
