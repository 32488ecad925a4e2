// ABOUTME: Integration tests for sealed types.
// ABOUTME: Verifies derivation fails at definition time while instantiation keeps working.

use compkit::*;

#[test]
fn deriving_from_sealed_type_fails() {
    let registry = Registry::new();
    let concrete = TypeBuilder::new("Concrete").build(&registry).unwrap();
    let _before = Object::new(&concrete);

    let sealed = registry.seal(&concrete);
    assert!(std::sync::Arc::ptr_eq(&sealed, &concrete));
    assert!(registry.is_sealed(&concrete));

    let err = TypeBuilder::new("Subclass")
        .base(&concrete)
        .build(&registry)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Inheritance(InheritanceError::Sealed { ref sealed, ref derived })
            if sealed == "Concrete" && derived == "Subclass"
    ));
    assert!(err.to_string().contains("Concrete"));

    let after = Object::new(&concrete);
    assert!(after.is_instance(&concrete));
}

#[test]
fn sealed_base_anywhere_in_bases_blocks_derivation() {
    let registry = Registry::new();
    let open = TypeBuilder::new("Open").build(&registry).unwrap();
    let closed = registry.seal(&TypeBuilder::new("Closed").build(&registry).unwrap());

    let err = TypeBuilder::new("Mixed")
        .base(&open)
        .base(&closed)
        .build(&registry)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Inheritance(InheritanceError::Sealed { .. })
    ));
}

#[test]
fn sealing_is_permanent_and_repeatable() {
    let registry = Registry::new();
    let ty = TypeBuilder::new("Final").build(&registry).unwrap();
    registry.seal(&ty);
    registry.seal(&ty);

    for _ in 0..2 {
        assert!(TypeBuilder::new("Sub").base(&ty).build(&registry).is_err());
    }
    assert!(registry.is_sealed(&ty));
}

#[test]
fn subtypes_defined_before_sealing_still_work() {
    let registry = Registry::new();
    let base = TypeBuilder::new("Base").value("x", 1i64).build(&registry).unwrap();
    let derived = TypeBuilder::new("Derived").base(&base).build(&registry).unwrap();
    registry.seal(&base);

    assert_eq!(Object::new(&derived).getattr("x").unwrap(), Value::Int(1));
    assert!(!registry.is_sealed(&derived));
    assert!(
        TypeBuilder::new("Grandchild")
            .base(&derived)
            .build(&registry)
            .is_ok()
    );
}

#[test]
fn sealed_type_refuses_derivation_through_any_registry() {
    let sealing = Registry::new();
    let other = Registry::new();
    let ty = TypeBuilder::new("Shared").build(&sealing).unwrap();
    sealing.seal(&ty);

    assert!(ty.is_sealed());
    assert!(other.is_sealed(&ty));
    let err = TypeBuilder::new("Elsewhere")
        .base(&ty)
        .build(&other)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Inheritance(InheritanceError::Sealed { ref sealed, ref derived })
            if sealed == "Shared" && derived == "Elsewhere"
    ));
}
