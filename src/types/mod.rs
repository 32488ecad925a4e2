// ABOUTME: Identifiers and validated names shared across the object model.
// ABOUTME: Uses phantom types to keep type and object ids apart.

mod attribute_name;
mod id;

pub use attribute_name::{AttributeNameError, validate_identifier};
pub use id::{Id, ObjectId, ObjectMarker, TypeId, TypeMarker};
