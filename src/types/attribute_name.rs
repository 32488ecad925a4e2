// ABOUTME: Identifier validation for attribute names.
// ABOUTME: Applied when a registry is configured to only accept identifier-shaped names.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeNameError {
    #[error("attribute name cannot be empty")]
    Empty,

    #[error("attribute name cannot start with a digit")]
    StartsWithDigit,

    #[error("invalid character in attribute name: '{0}'")]
    InvalidChar(char),
}

/// Check that `name` has the shape `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Operator hooks such as `__len__` are ordinary identifiers and pass.
pub fn validate_identifier(name: &str) -> Result<(), AttributeNameError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(AttributeNameError::Empty);
    };

    if first.is_ascii_digit() {
        return Err(AttributeNameError::StartsWithDigit);
    }

    for c in std::iter::once(first).chain(chars) {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Err(AttributeNameError::InvalidChar(c));
        }
    }

    Ok(())
}
