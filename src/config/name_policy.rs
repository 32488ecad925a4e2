// ABOUTME: Policy deciding which strings are accepted as attribute names.
// ABOUTME: Either any string, or identifier-shaped names only.

use crate::error::{Error, Result};
use crate::types::validate_identifier;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamePolicy {
    #[default]
    Any,
    Identifier,
}

impl NamePolicy {
    pub fn check(&self, name: &str) -> Result<()> {
        match self {
            NamePolicy::Any => Ok(()),
            NamePolicy::Identifier => validate_identifier(name)
                .map_err(|e| Error::InvalidArgument(format!("'{name}': {e}"))),
        }
    }
}
