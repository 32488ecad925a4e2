// ABOUTME: Sealed trait pattern for attribute descriptors.
// ABOUTME: Only the crate's own descriptor types take part in the lookup protocol.

/// Sealed trait to prevent external implementations.
///
/// Instance lookup decides precedence from `Descriptor::is_data`; only the
/// descriptor types defined in this crate implement it.
pub trait Sealed {}
