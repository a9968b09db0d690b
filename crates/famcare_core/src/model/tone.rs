//! Badge tones for categorical fields.
//!
//! The UI shell maps each tone onto its own palette; core only decides which
//! tone a category gets.

use serde::{Deserialize, Serialize};

/// Display tone for a badge or status dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Blue,
    Green,
    Gray,
    Orange,
    Pink,
    Purple,
    Red,
    Yellow,
}

impl BadgeTone {
    /// Stable string id passed across the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Gray => "gray",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }
}
