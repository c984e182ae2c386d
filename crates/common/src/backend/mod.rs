//! Seams to the world outside the process
//!
//! Everything the navigator learns about the mount comes through a [`Backend`]:
//! directory enumeration, `gio info` metadata and the two copy primitives.
//! Real-filesystem probes used by copy classification go through [`RealFs`].

mod gio;
mod host;

pub use gio::GioBackend;
pub use host::HostFs;

use std::io;
use std::path::{Path, PathBuf};

/// Blocking access to the mount and its external tools.
pub trait Backend: std::fmt::Debug {
    /// Immediate children of `location`, in whatever order the mount yields
    fn read_dir(&self, location: &Path) -> Result<Vec<PathBuf>, BackendError>;

    /// Raw textual metadata for `path` (`gio info` output)
    fn info(&self, path: &Path) -> Result<String, BackendError>;

    /// Create a directory at `path`
    fn make_dir(&self, path: &Path) -> Result<(), BackendError>;

    /// Generic filesystem copy; both endpoints must be addressable as paths
    fn copy(&self, from: &Path, to: &Path) -> Result<(), BackendError>;

    /// Mount-aware copy, able to dereference opaque mount entries
    fn mount_copy(&self, from: &Path, to: &Path) -> Result<(), BackendError>;
}

/// Existence checks against the ordinary filesystem.
pub trait RealFs: std::fmt::Debug {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The tool could not be started at all
    #[error("'{program}' could not be run: {source}")]
    Unavailable {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The tool ran and reported failure for this invocation
    #[error("{program} failed ({}): {stderr}", describe_exit(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BackendError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, BackendError::Unavailable { .. })
    }

    /// Name of the program involved, if any
    pub fn program(&self) -> Option<&str> {
        match self {
            BackendError::Unavailable { program, .. } | BackendError::Failed { program, .. } => {
                Some(program)
            }
            BackendError::Io { .. } => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
