// ABOUTME: Strategy used to linearize a type's ancestors into its resolution order.
// ABOUTME: Supports c3 (default) and depth-first.

use serde::de::{self, Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Linearization {
    /// C3 merge. Keeps every base ahead of its own ancestors and preserves
    /// declared base order; rejects hierarchies with no consistent order.
    #[default]
    C3,
    /// Depth-first, left to right, first occurrence wins. Never fails.
    DepthFirst,
}

impl FromStr for Linearization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c3" => Ok(Linearization::C3),
            "depth-first" => Ok(Linearization::DepthFirst),
            _ => Err(format!("unknown linearization: {}", s)),
        }
    }
}

impl fmt::Display for Linearization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Linearization::C3 => write!(f, "c3"),
            Linearization::DepthFirst => write!(f, "depth-first"),
        }
    }
}

impl<'de> Deserialize<'de> for Linearization {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
