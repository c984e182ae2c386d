//! Process-backed [`Backend`] driving `gio` and `cp`

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{Backend, BackendError};

pub const DEFAULT_GIO: &str = "gio";
pub const DEFAULT_CP: &str = "cp";

/// Runs the GIO command line tool for metadata, directory creation and
/// mount-aware copies, and plain `cp` for generic copies.
///
/// Every call blocks until the child exits. There is no timeout.
#[derive(Debug, Clone)]
pub struct GioBackend {
    gio: String,
    cp: String,
}

impl Default for GioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GioBackend {
    pub fn new() -> Self {
        Self {
            gio: DEFAULT_GIO.to_string(),
            cp: DEFAULT_CP.to_string(),
        }
    }

    /// Use alternative program names or paths for the two tools
    pub fn with_programs(gio: impl Into<String>, cp: impl Into<String>) -> Self {
        Self {
            gio: gio.into(),
            cp: cp.into(),
        }
    }

    fn run(&self, program: &str, args: &[&OsStr]) -> Result<String, BackendError> {
        tracing::debug!("running {} {:?}", program, args);
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| BackendError::Unavailable {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!("{} exited with {:?}: {}", program, output.status, stderr);
            return Err(BackendError::Failed {
                program: program.to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Backend for GioBackend {
    fn read_dir(&self, location: &Path) -> Result<Vec<PathBuf>, BackendError> {
        let io_err = |source| BackendError::Io {
            path: location.to_path_buf(),
            source,
        };
        let mut children = Vec::new();
        for entry in std::fs::read_dir(location).map_err(io_err)? {
            children.push(entry.map_err(io_err)?.path());
        }
        Ok(children)
    }

    fn info(&self, path: &Path) -> Result<String, BackendError> {
        self.run(&self.gio, &[OsStr::new("info"), path.as_os_str()])
    }

    fn make_dir(&self, path: &Path) -> Result<(), BackendError> {
        self.run(&self.gio, &[OsStr::new("mkdir"), path.as_os_str()])
            .map(|_| ())
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<(), BackendError> {
        self.run(&self.cp, &[from.as_os_str(), to.as_os_str()])
            .map(|_| ())
    }

    fn mount_copy(&self, from: &Path, to: &Path) -> Result<(), BackendError> {
        self.run(
            &self.gio,
            &[OsStr::new("copy"), from.as_os_str(), to.as_os_str()],
        )
        .map(|_| ())
    }
}
