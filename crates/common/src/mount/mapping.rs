//! Per-directory display-name index

use std::collections::BTreeMap;

use crate::backend::{Backend, BackendError};
use crate::entry::MountEntry;

use super::collision::{Collision, CollisionResolver, Resolution};
use super::resolver::NameResolver;

/// Display name -> entry index for the immediate children of one location.
///
/// Built fresh from the mount on every use and never updated in place, so it
/// is at most as stale as the call that produced it. Children whose display
/// name cannot be resolved are left out.
#[derive(Debug, Clone)]
pub struct DirectoryMapping {
    location: MountEntry,
    entries: BTreeMap<String, MountEntry>,
}

impl DirectoryMapping {
    /// Enumerate `location` and resolve every child.
    ///
    /// Issues one blocking metadata query per child. Children are resolved in
    /// raw-name order so collision handling does not depend on the order the
    /// mount enumerates them in.
    pub fn build(
        backend: &dyn Backend,
        location: &MountEntry,
        collisions: &dyn CollisionResolver,
    ) -> Result<Self, BackendError> {
        let mut children = backend.read_dir(location.path())?;
        children.sort();

        let resolver = NameResolver::new(backend);
        let mut mapping = Self::empty(location.clone());
        for child in children {
            let entry = MountEntry::new(child);
            match resolver.resolve(&entry)? {
                Some(name) => mapping.insert(name, entry, collisions),
                None => tracing::debug!("dropping unresolvable entry {}", entry),
            }
        }

        tracing::debug!(
            "mapped {} entries under {}",
            mapping.entries.len(),
            location
        );
        Ok(mapping)
    }

    /// Mapping over already-resolved entries; later duplicates replace earlier ones
    pub fn from_entries(
        location: MountEntry,
        entries: impl IntoIterator<Item = (String, MountEntry)>,
    ) -> Self {
        Self {
            location,
            entries: entries.into_iter().collect(),
        }
    }

    fn empty(location: MountEntry) -> Self {
        Self {
            location,
            entries: BTreeMap::new(),
        }
    }

    fn insert(&mut self, name: String, incoming: MountEntry, collisions: &dyn CollisionResolver) {
        let Some(existing) = self.entries.get(&name) else {
            self.entries.insert(name, incoming);
            return;
        };

        let collision = Collision::new(name, existing.clone(), incoming);
        match collisions.resolve(&collision) {
            Resolution::KeepExisting => {}
            Resolution::UseIncoming => {
                tracing::debug!(
                    "'{}' now maps to {} (was {})",
                    collision.name,
                    collision.incoming,
                    collision.existing
                );
                self.entries.insert(collision.name, collision.incoming);
            }
            Resolution::RenameIncoming { name } => {
                if self.entries.contains_key(&name) {
                    tracing::warn!(
                        "cannot map {} as '{}': name already taken",
                        collision.incoming,
                        name
                    );
                } else {
                    self.entries.insert(name, collision.incoming);
                }
            }
        }
    }

    /* Getters */

    /// The location whose children this mapping indexes
    pub fn location(&self) -> &MountEntry {
        &self.location
    }

    pub fn get(&self, name: &str) -> Option<&MountEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Display names in case-sensitive lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MountEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
