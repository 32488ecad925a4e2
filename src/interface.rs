// ABOUTME: Composable sets of required attribute names.
// ABOUTME: Installs placeholders on types and structurally validates arbitrary values.

use crate::error::{AttributeError, Error, Result};
use crate::registry::Registry;
use crate::typedef::{TypeBuilder, TypeDef, TypeRef};
use crate::value::Value;
use std::sync::Arc;

/// An ordered list of attribute names a type promises to expose.
///
/// Built once by flattening names and nested interfaces in argument order.
/// Duplicates are kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityInterface {
    names: Arc<[String]>,
}

impl CapabilityInterface {
    /// Each argument must be a name (`Value::Str`) or another interface
    /// (`Value::Interface`), whose names are inlined at that position.
    pub fn new<I, A>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<Value>,
    {
        let mut names = Vec::new();
        for arg in args {
            match arg.into() {
                Value::Str(name) => names.push(name),
                Value::Interface(nested) => names.extend(nested.names.iter().cloned()),
                other => {
                    return Err(Error::InvalidArgument(format!(
                        "expected attribute name or interface, got {}",
                        other.kind()
                    )));
                }
            }
        }
        Ok(Self {
            names: names.into(),
        })
    }

    /// The interface a type still owes: its unresolved placeholders.
    pub fn of_type(ty: &TypeDef) -> Self {
        Self {
            names: ty.required_attributes().into(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Install a placeholder on `ty` for every name its own table lacks.
    ///
    /// Existing entries are never touched, so applying twice is a no-op.
    /// Names are installed as given; [`Registry::apply`] checks them against
    /// a registry's attribute name policy first.
    pub fn apply(&self, ty: &TypeRef) -> TypeRef {
        for name in self.names.iter() {
            if ty.install_placeholder(name) {
                tracing::debug!(ty = ty.name(), attribute = %name, "installed placeholder");
            }
        }
        Arc::clone(ty)
    }

    /// Structural check: does every required name resolve on `value`?
    ///
    /// Every name is checked. A missing name makes the result `false`; a
    /// placeholder that never resolves is a defect in the implementing type
    /// and is returned as `Error::ContractViolation`, whatever else is missing.
    pub fn validate(&self, value: &Value) -> Result<bool> {
        let mut satisfied = true;
        for name in self.names.iter() {
            match value.try_get(name) {
                Ok(_) => {}
                Err(AttributeError::Missing(_)) => satisfied = false,
                Err(AttributeError::ContractViolation(e)) => return Err(e.into()),
            }
        }
        tracing::debug!(
            target_type = %value.type_name(),
            satisfied,
            "validated interface"
        );
        Ok(satisfied)
    }

    /// Define an abstract type whose own table holds a placeholder for every
    /// required name.
    pub fn define_type<'a>(
        &self,
        registry: &Registry,
        name: &str,
        bases: impl IntoIterator<Item = &'a TypeRef>,
    ) -> Result<TypeRef> {
        TypeBuilder::new(name)
            .bases(bases)
            .implements(self)
            .build(registry)
    }
}
