// ABOUTME: Test support utilities.
// ABOUTME: Provides tracing setup and shared type fixtures for integration tests.

use compkit::{Object, Registry, TypeBuilder, TypeRef, Value};
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("compkit=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A type whose instances carry `var` and report a length of 42.
#[allow(dead_code)]
pub fn thing_type(registry: &Registry) -> TypeRef {
    TypeBuilder::new("Thing")
        .method("__len__", |_, _| Ok(Value::Int(42)))
        .build(registry)
        .unwrap()
}

#[allow(dead_code)]
pub fn thing(ty: &TypeRef) -> Object {
    Object::with_slots(ty, [("var", "hello")])
}
