// ABOUTME: Property tests for interface composition and placeholder installation.
// ABOUTME: Uses proptest to check ordering and non-overwrite for arbitrary names.

use compkit::{CapabilityInterface, Object, Registry, TypeBuilder, Value};
use proptest::prelude::*;

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..8)
}

proptest! {
    #[test]
    fn nesting_inlines_names_in_order(prefix in names(), nested in names(), suffix in names()) {
        let inner = CapabilityInterface::new(nested.clone()).unwrap();
        let args: Vec<Value> = prefix
            .iter()
            .cloned()
            .map(Value::from)
            .chain(std::iter::once(Value::from(inner)))
            .chain(suffix.iter().cloned().map(Value::from))
            .collect();

        let outer = CapabilityInterface::new(args).unwrap();
        let expected: Vec<String> = prefix.into_iter().chain(nested).chain(suffix).collect();
        prop_assert_eq!(outer.names(), expected.as_slice());
    }

    #[test]
    fn apply_never_overwrites_existing_members(existing in names(), required in names()) {
        let registry = Registry::new();
        let builder = existing
            .iter()
            .fold(TypeBuilder::new("T"), |b, name| b.value(name.clone(), name.clone()));
        let ty = builder.build(&registry).unwrap();

        CapabilityInterface::new(required.clone()).unwrap().apply(&ty);

        let obj = Object::new(&ty);
        for name in &existing {
            prop_assert_eq!(obj.getattr(name).unwrap(), Value::from(name.clone()));
        }
        for name in required.iter().filter(|n| !existing.contains(n)) {
            prop_assert!(ty.own_member(name).unwrap().is_placeholder());
        }
    }
}
