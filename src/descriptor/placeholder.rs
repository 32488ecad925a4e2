// ABOUTME: Marker for an attribute a type requires but does not itself provide.
// ABOUTME: Reads try the fallback, then later definitions, else raise a contract violation.

use super::{Descriptor, sealed};
use crate::error::ContractViolation;
use crate::object::{Object, Resolution};
use crate::typedef::TypeDef;
use crate::types::TypeId;
use std::sync::Arc;

/// A required-but-unimplemented attribute.
///
/// Bound to the declaring type when installed. The declaring type is kept
/// by id and name only, for diagnostics and for locating the placeholder in
/// a derived type's resolution order.
#[derive(Debug, Clone)]
pub struct PlaceholderAttribute {
    name: Arc<str>,
    declaring_id: TypeId,
    declaring_name: Arc<str>,
}

impl PlaceholderAttribute {
    pub(crate) fn bind(declaring_id: TypeId, declaring_name: &str, name: &str) -> Self {
        Self {
            name: name.into(),
            declaring_id,
            declaring_name: declaring_name.into(),
        }
    }

    pub fn declaring_type(&self) -> &str {
        &self.declaring_name
    }

    pub fn declaring_id(&self) -> TypeId {
        self.declaring_id
    }

    fn violation(&self, accessed_via: &TypeDef) -> ContractViolation {
        let derived = (accessed_via.id() != self.declaring_id).then(|| accessed_via.name());
        ContractViolation::new(&self.declaring_name, derived, &self.name)
    }
}

impl sealed::Sealed for PlaceholderAttribute {}

impl Descriptor for PlaceholderAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    /// The fallback resolver answers first, then concrete definitions further
    /// along the accessing type's resolution order; otherwise the contract is
    /// broken.
    fn get(&self, instance: &Object) -> Resolution {
        if let Some(value) = instance.fallback(&self.name) {
            return Ok(value);
        }

        let ty = instance.type_ref();
        if let Some(member) = ty.lookup_concrete_after(self.declaring_id, &self.name) {
            return member.bind(instance);
        }

        Err(self.violation(ty).into())
    }
}
