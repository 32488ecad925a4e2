// ABOUTME: Type factory that linearizes bases and enforces sealing.
// ABOUTME: Sealing flags the type itself; deriving from it fails at definition time in any registry.

use crate::config::{Linearization, RegistryConfig};
use crate::error::{InheritanceError, Result};
use crate::interface::CapabilityInterface;
use crate::typedef::{TypeBuilder, TypeDef, TypeRef, linearize};
use crate::value::Value;
use std::collections::HashSet;
use std::sync::Arc;

/// Defines types under one configuration.
///
/// The sealed flag lives on each type, so a sealed type refuses derivation
/// through every registry.
#[derive(Debug, Default)]
pub struct Registry {
    config: RegistryConfig,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Validate and assemble a type.
    ///
    /// Fails with an inheritance error when a base is sealed, listed twice,
    /// or the bases admit no consistent resolution order.
    pub fn define(&self, builder: TypeBuilder) -> Result<TypeRef> {
        let name = builder.name();

        for attribute in builder.attribute_names() {
            self.config.attribute_names.check(attribute)?;
        }

        let bases = builder.declared_bases();
        if let Some(sealed) = bases.iter().find(|b| b.is_sealed()) {
            return Err(InheritanceError::Sealed {
                sealed: sealed.name().to_string(),
                derived: name.to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = bases.iter().find(|b| !seen.insert(b.id())) {
            return Err(InheritanceError::DuplicateBase {
                base: duplicate.name().to_string(),
                derived: name.to_string(),
            }
            .into());
        }

        let ancestors = match self.config.linearization {
            Linearization::C3 => linearize::c3(name, bases)?,
            Linearization::DepthFirst => linearize::depth_first(bases),
        };

        let ty = builder.assemble(ancestors);
        tracing::debug!(ty = ty.name(), mro = ?ty.mro_names(), "defined type");
        Ok(ty)
    }

    /// Mark `ty` as non-derivable. There is no way back.
    pub fn seal(&self, ty: &TypeRef) -> TypeRef {
        if ty.mark_sealed() {
            tracing::debug!(ty = ty.name(), "sealed type");
        }
        Arc::clone(ty)
    }

    pub fn is_sealed(&self, ty: &TypeDef) -> bool {
        ty.is_sealed()
    }

    /// Apply `interface` to `ty` after checking every name against this
    /// registry's attribute name policy. Nothing is installed on failure.
    pub fn apply(&self, interface: &CapabilityInterface, ty: &TypeRef) -> Result<TypeRef> {
        for name in interface.names() {
            self.config.attribute_names.check(name)?;
        }
        Ok(interface.apply(ty))
    }

    /// Build an interface, applying this registry's attribute name policy.
    pub fn interface<I, A>(&self, args: I) -> Result<CapabilityInterface>
    where
        I: IntoIterator<Item = A>,
        A: Into<Value>,
    {
        let interface = CapabilityInterface::new(args)?;
        for name in interface.names() {
            self.config.attribute_names.check(name)?;
        }
        Ok(interface)
    }
}
