//! Locating the Google Drive mount under the GVFS runtime directory

use std::io;
use std::path::{Path, PathBuf};

use crate::entry::MountEntry;

/// GVFS names Drive mounts `google-drive:host=...,user=...`
pub const DEFAULT_PREFIX: &str = "google-drive:";

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("no user runtime directory (is XDG_RUNTIME_DIR set?)")]
    NoRuntimeDir,
    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No Google Drive mount found in GVFS.")]
    NotFound { dir: PathBuf },
}

/// `$XDG_RUNTIME_DIR/gvfs`, where GVFS exposes its FUSE mounts
pub fn gvfs_dir() -> Result<PathBuf, DiscoveryError> {
    dirs::runtime_dir()
        .map(|dir| dir.join("gvfs"))
        .ok_or(DiscoveryError::NoRuntimeDir)
}

/// First mount in `dir` whose name starts with `prefix`.
///
/// Several matching mounts (one per signed-in account) are ordered by name so
/// the choice is stable across runs.
pub fn discover_root(dir: &Path, prefix: &str) -> Result<MountEntry, DiscoveryError> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(DiscoveryError::NotFound {
                dir: dir.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(DiscoveryError::Unreadable {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut candidates: Vec<PathBuf> = read_dir
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(prefix))
        .map(|entry| entry.path())
        .collect();
    candidates.sort();

    if candidates.len() > 1 {
        tracing::info!(
            "found {} mounts matching '{}', using the first",
            candidates.len(),
            prefix
        );
    }

    candidates
        .into_iter()
        .next()
        .map(MountEntry::new)
        .ok_or_else(|| DiscoveryError::NotFound {
            dir: dir.to_path_buf(),
        })
}
