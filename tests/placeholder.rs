// ABOUTME: Integration tests for placeholder attributes.
// ABOUTME: Verifies contract violations, diagnostics and multiple-base resolution.

use compkit::*;

fn abstract_type(registry: &Registry) -> TypeRef {
    TypeBuilder::new("A").placeholder("var").build(registry).unwrap()
}

#[test]
fn unresolved_on_declaring_type() {
    let registry = Registry::new();
    let a = abstract_type(&registry);

    let err = Object::new(&a).getattr("var").unwrap_err();
    let Error::ContractViolation(violation) = &err else {
        panic!("expected contract violation, got {err:?}");
    };
    assert_eq!(violation.attribute(), "var");
    assert_eq!(violation.declaring_type(), "A");
    assert_eq!(violation.derived_type(), None);
    assert_eq!(
        err.to_string(),
        "type A promises attribute 'var' but doesn't define it"
    );
}

#[test]
fn unresolved_through_derived_type() {
    let registry = Registry::new();
    let a = abstract_type(&registry);
    let b = TypeBuilder::new("B").base(&a).build(&registry).unwrap();

    let err = Object::new(&b).getattr("var").unwrap_err();
    assert_eq!(
        err.to_string(),
        "type A requires derived type B to define attribute 'var'"
    );
}

#[test]
fn type_level_read_returns_placeholder() {
    let registry = Registry::new();
    let a = abstract_type(&registry);

    let member = a.getattr("var").unwrap();
    let placeholder = member.as_placeholder().unwrap();
    assert_eq!(placeholder.name(), "var");
    assert_eq!(placeholder.declaring_id(), a.id());
}

#[test]
fn concrete_base_after_declaring_base_wins() {
    let registry = Registry::new();
    let a = abstract_type(&registry);
    let b = TypeBuilder::new("B").value("var", true).build(&registry).unwrap();
    let concrete = TypeBuilder::new("Concrete")
        .base(&a)
        .base(&b)
        .build(&registry)
        .unwrap();

    assert_eq!(concrete.mro_names(), ["Concrete", "A", "B"]);
    assert_eq!(Object::new(&concrete).getattr("var").unwrap(), Value::Bool(true));
    assert!(concrete.required_attributes().is_empty());
}

#[test]
fn fallback_on_later_base_resolves() {
    let registry = Registry::new();
    let a = abstract_type(&registry);
    let b = TypeBuilder::new("B")
        .fallback(|_: &Object, _: &str| Some(Value::Bool(true)))
        .build(&registry)
        .unwrap();
    let concrete = TypeBuilder::new("Concrete")
        .base(&a)
        .base(&b)
        .build(&registry)
        .unwrap();

    assert_eq!(Object::new(&concrete).getattr("var").unwrap(), Value::Bool(true));
}

#[test]
fn fallback_answers_before_later_concrete_base() {
    let registry = Registry::new();
    let a = abstract_type(&registry);
    let b = TypeBuilder::new("B").value("var", true).build(&registry).unwrap();
    let concrete = TypeBuilder::new("C")
        .base(&a)
        .base(&b)
        .fallback(|_: &Object, _: &str| Some(Value::from("fallback")))
        .build(&registry)
        .unwrap();

    assert_eq!(
        Object::new(&concrete).getattr("var").unwrap(),
        Value::from("fallback")
    );
}

#[test]
fn concrete_base_first_wins_by_plain_lookup() {
    let registry = Registry::new();
    let a = abstract_type(&registry);
    let b = TypeBuilder::new("B").value("var", 5i64).build(&registry).unwrap();
    let concrete = TypeBuilder::new("Concrete")
        .base(&b)
        .base(&a)
        .build(&registry)
        .unwrap();

    assert_eq!(Object::new(&concrete).getattr("var").unwrap(), Value::Int(5));
}

#[test]
fn instance_value_shadows_placeholder() {
    let registry = Registry::new();
    let a = abstract_type(&registry);
    let obj = Object::new(&a);

    obj.setattr("var", Value::from("set")).unwrap();
    assert_eq!(obj.getattr("var").unwrap(), Value::from("set"));

    obj.delattr("var").unwrap();
    assert!(matches!(obj.getattr("var"), Err(Error::ContractViolation(_))));
}

#[test]
fn try_get_distinguishes_missing_from_unimplemented() {
    let registry = Registry::new();
    let a = abstract_type(&registry);
    let obj = Object::new(&a);

    assert!(matches!(
        obj.try_get("var"),
        Err(AttributeError::ContractViolation(_))
    ));
    assert!(matches!(obj.try_get("other"), Err(AttributeError::Missing(_))));
    assert!(!obj.hasattr("other").unwrap());
    assert!(obj.hasattr("var").is_err());
}
