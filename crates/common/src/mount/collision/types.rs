use crate::entry::MountEntry;

/// Two siblings resolved to the same display name
#[derive(Debug, Clone)]
pub struct Collision {
    /// The shared display name
    pub name: String,
    /// Entry already held by the mapping under `name`
    pub existing: MountEntry,
    /// Entry resolved later under the same name
    pub incoming: MountEntry,
}

impl Collision {
    pub fn new(name: impl Into<String>, existing: MountEntry, incoming: MountEntry) -> Self {
        Self {
            name: name.into(),
            existing,
            incoming,
        }
    }
}

/// What the mapping does with a collision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Keep the existing entry, drop the incoming one
    KeepExisting,
    /// Replace the existing entry with the incoming one
    UseIncoming,
    /// Keep both, indexing the incoming entry under a new name
    RenameIncoming {
        /// The new key for the incoming entry
        name: String,
    },
}
