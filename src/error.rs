// ABOUTME: Error types surfaced by attribute resolution, type definition and config loading.
// ABOUTME: Uses thiserror; the attribute failures stay distinct so callers can tell them apart.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Nothing on the type, the instance or the fallback path defines the name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{owner} has no attribute '{attribute}'")]
pub struct AttributeMissing {
    owner: String,
    attribute: String,
}

impl AttributeMissing {
    /// Missing on an instance of the named type.
    pub fn on_instance(type_name: &str, attribute: &str) -> Self {
        Self {
            owner: format!("'{type_name}' object"),
            attribute: attribute.to_string(),
        }
    }

    /// Missing from a type's own resolution order.
    pub fn on_type(type_name: &str, attribute: &str) -> Self {
        Self {
            owner: format!("type {type_name}"),
            attribute: attribute.to_string(),
        }
    }

    /// Missing on a primitive value, which exposes no attributes.
    pub fn on_value(kind: &str, attribute: &str) -> Self {
        Self {
            owner: format!("'{kind}' value"),
            attribute: attribute.to_string(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

/// A type declared that an attribute must exist, yet nothing ever provided it.
///
/// This always points at a defect in the implementing type, never at the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ContractViolation {
    declaring_type: String,
    derived_type: Option<String>,
    attribute: String,
}

impl ContractViolation {
    pub(crate) fn new(declaring_type: &str, derived_type: Option<&str>, attribute: &str) -> Self {
        Self {
            declaring_type: declaring_type.to_string(),
            derived_type: derived_type.map(str::to_string),
            attribute: attribute.to_string(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The type whose placeholder was reached.
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// The derived type the access went through, if it wasn't the declaring type itself.
    pub fn derived_type(&self) -> Option<&str> {
        self.derived_type.as_deref()
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.derived_type {
            None => write!(
                f,
                "type {} promises attribute '{}' but doesn't define it",
                self.declaring_type, self.attribute
            ),
            Some(derived) => write!(
                f,
                "type {} requires derived type {} to define attribute '{}'",
                self.declaring_type, derived, self.attribute
            ),
        }
    }
}

/// Failures raised synchronously while constructing a new type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InheritanceError {
    #[error("type {sealed} is sealed and cannot be derived from (attempted by {derived})")]
    Sealed { sealed: String, derived: String },

    #[error("duplicate base type {base} in definition of {derived}")]
    DuplicateBase { base: String, derived: String },

    #[error("cannot create a consistent resolution order for {derived}")]
    InconsistentOrder { derived: String },
}

/// The two ways an attribute read can fail.
///
/// Together with a successful value this is the three-way result every
/// attribute check goes through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error(transparent)]
    Missing(#[from] AttributeMissing),

    #[error(transparent)]
    ContractViolation(#[from] ContractViolation),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    AttributeMissing(#[from] AttributeMissing),

    #[error(transparent)]
    ContractViolation(#[from] ContractViolation),

    #[error(transparent)]
    Inheritance(#[from] InheritanceError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<AttributeError> for Error {
    fn from(err: AttributeError) -> Self {
        match err {
            AttributeError::Missing(e) => Error::AttributeMissing(e),
            AttributeError::ContractViolation(e) => Error::ContractViolation(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
