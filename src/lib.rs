// ABOUTME: Library root for compkit: capability interfaces, forwarding and sealing.
// ABOUTME: Built on an explicit object model with resolution orders and attribute tables.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod interface;
pub mod object;
pub mod protocol;
pub mod registry;
pub mod resolve;
pub mod typedef;
pub mod types;
pub mod value;

pub use config::RegistryConfig;
pub use descriptor::{Descriptor, ForwardingAccessor, PlaceholderAttribute};
pub use error::{
    AttributeError, AttributeMissing, ContractViolation, Error, InheritanceError, Result,
};
pub use interface::CapabilityInterface;
pub use object::{Object, Resolution};
pub use registry::Registry;
pub use resolve::Resolve;
pub use typedef::{Member, TypeBuilder, TypeDef, TypeRef};
pub use value::{BoundMethod, NativeMethod, Value};
