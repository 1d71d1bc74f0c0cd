//! Edge line types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of edge drawn around a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    /// Continuous edge
    Solid,
    /// Dashed edge
    Dashed,
    /// No edge at all
    None,
}

impl Default for LineType {
    fn default() -> Self {
        Self::Solid
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "Solid"),
            Self::Dashed => write!(f, "Dashed"),
            Self::None => write!(f, "None"),
        }
    }
}

impl FromStr for LineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "dashed" | "dash" => Ok(Self::Dashed),
            "none" => Ok(Self::None),
            _ => Err(format!("Unknown line type: {}", s)),
        }
    }
}
