//! Opaque handles into the mount namespace

use std::fmt;
use std::path::{Path, PathBuf};

/// Reserved token for "go up one level"
pub const PARENT_TOKEN: &str = "..";

/// One node in the mount namespace.
///
/// GVFS names Drive entries by their remote IDs, so the final path component
/// is meaningless to a human. It is only ever shown as a fallback when the
/// display name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountEntry {
    path: PathBuf,
}

impl MountEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying ID-style name (last path component)
    pub fn raw_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Path of a literal child `name` under this entry.
    ///
    /// Names must be a single component: no separators, not empty, not `.`/`..`.
    pub fn child(&self, name: &str) -> Result<PathBuf, InvalidName> {
        validate_name(name)?;
        Ok(self.path.join(name))
    }
}

impl fmt::Display for MountEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl From<PathBuf> for MountEntry {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid name: {name:?}")]
pub struct InvalidName {
    pub name: String,
}

/// Reject anything that is not a single path component
pub fn validate_name(name: &str) -> Result<(), InvalidName> {
    if name.is_empty() || name == "." || name == PARENT_TOKEN || name.contains('/') {
        return Err(InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}
