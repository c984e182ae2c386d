use super::types::{Collision, Resolution};
use super::CollisionResolver;

/// The most recently resolved sibling takes the name.
///
/// Siblings are resolved in raw-name order, so the winner is the entry with
/// the greatest raw ID.
#[derive(Debug, Clone, Default)]
pub struct LastWriteWins;

impl LastWriteWins {
    pub fn new() -> Self {
        Self
    }
}

impl CollisionResolver for LastWriteWins {
    fn resolve(&self, _collision: &Collision) -> Resolution {
        Resolution::UseIncoming
    }
}
