//! Display-name resolution for single mount entries

use crate::backend::{Backend, BackendError};
use crate::entry::MountEntry;

use super::metadata::display_name;

/// Resolves mount entries to their display names, one `gio info` per call.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    backend: &'a dyn Backend,
}

impl<'a> NameResolver<'a> {
    pub fn new(backend: &'a dyn Backend) -> Self {
        Self { backend }
    }

    /// Display name of `entry`, or `None` if this entry cannot be resolved.
    ///
    /// A per-entry tool failure or a missing display-name line yields `None`.
    /// Only an unavailable tool is returned as an error, since no other
    /// entry could be resolved either.
    pub fn resolve(&self, entry: &MountEntry) -> Result<Option<String>, BackendError> {
        match self.backend.info(entry.path()) {
            Ok(output) => {
                let name = display_name(&output);
                if name.is_none() {
                    tracing::debug!("no display name in metadata for {}", entry);
                }
                Ok(name)
            }
            Err(e) if e.is_unavailable() => Err(e),
            Err(e) => {
                tracing::debug!("failed to resolve {}: {}", entry, e);
                Ok(None)
            }
        }
    }

    /// Display name of `entry`, falling back to its raw ID name
    pub fn resolve_or_raw(&self, entry: &MountEntry) -> Result<String, BackendError> {
        Ok(self
            .resolve(entry)?
            .unwrap_or_else(|| entry.raw_name()))
    }
}
