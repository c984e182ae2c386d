use super::types::{Collision, Resolution};
use super::CollisionResolver;

/// The first resolved sibling keeps the name; later ones are dropped
#[derive(Debug, Clone, Default)]
pub struct FirstWins;

impl FirstWins {
    pub fn new() -> Self {
        Self
    }
}

impl CollisionResolver for FirstWins {
    fn resolve(&self, collision: &Collision) -> Resolution {
        tracing::debug!(
            "keeping {} for '{}', dropping {}",
            collision.existing,
            collision.name,
            collision.incoming
        );
        Resolution::KeepExisting
    }
}
