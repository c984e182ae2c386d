//! Display-name collision handling for directory mappings
//!
//! Drive allows several siblings to share a display name, but a mapping is
//! keyed by display name. When a second sibling resolves to a name that is
//! already mapped, a [`CollisionResolver`] decides what the mapping keeps.
//!
//! # Built-in Policies
//!
//! - **[`LastWriteWins`]**: The later sibling replaces the earlier one (default)
//! - **[`FirstWins`]**: The earlier sibling is kept, the later one is dropped
//! - **[`Disambiguate`]**: The later sibling is re-keyed as `<stem>@<id>.<ext>`

mod disambiguate;
mod first_wins;
mod last_write_wins;
mod types;

pub use disambiguate::Disambiguate;
pub use first_wins::FirstWins;
pub use last_write_wins::LastWriteWins;
pub use types::{Collision, Resolution};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Strategy for two siblings sharing a display name
pub trait CollisionResolver: fmt::Debug {
    fn resolve(&self, collision: &Collision) -> Resolution;
}

/// Configurable selection of a built-in resolver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    #[default]
    LastWriteWins,
    FirstWins,
    Disambiguate,
}

impl CollisionPolicy {
    pub fn resolver(&self) -> Box<dyn CollisionResolver> {
        match self {
            CollisionPolicy::LastWriteWins => Box::new(LastWriteWins::new()),
            CollisionPolicy::FirstWins => Box::new(FirstWins::new()),
            CollisionPolicy::Disambiguate => Box::new(Disambiguate::new()),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::LastWriteWins => "last-write-wins",
            CollisionPolicy::FirstWins => "first-wins",
            CollisionPolicy::Disambiguate => "disambiguate",
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collision policy '{0}' (expected last-write-wins, first-wins or disambiguate)")]
pub struct UnknownPolicy(pub String);

impl FromStr for CollisionPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-write-wins" => Ok(CollisionPolicy::LastWriteWins),
            "first-wins" => Ok(CollisionPolicy::FirstWins),
            "disambiguate" => Ok(CollisionPolicy::Disambiguate),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}
