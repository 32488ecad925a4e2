// ABOUTME: Type-level attribute entries that compute their value on access.
// ABOUTME: Defines the Descriptor protocol, PlaceholderAttribute and ForwardingAccessor.

mod forward;
mod placeholder;
pub(crate) mod sealed;

pub use forward::ForwardingAccessor;
pub use placeholder::PlaceholderAttribute;

use crate::object::{Object, Resolution};

/// An attribute stored on a type whose read goes through code instead of
/// returning a stored value.
pub trait Descriptor: sealed::Sealed {
    /// The attribute name this descriptor was attached under.
    fn name(&self) -> &str;

    /// Read the attribute for `instance`.
    fn get(&self, instance: &Object) -> Resolution;

    /// Data descriptors take precedence over the instance's own slots and
    /// intercept writes and deletes.
    fn is_data(&self) -> bool {
        false
    }
}
