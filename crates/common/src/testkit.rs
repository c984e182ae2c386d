//! In-memory stand-ins for the mount and the local filesystem
//!
//! [`FakeBackend`] models a GVFS Drive tree: entries live at ID-style paths and
//! carry an optional display name. Entries without one fail `info`, the way a
//! broken remote object does. All calls are recorded for assertions.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::backend::{Backend, BackendError, RealFs};
use crate::entry::MountEntry;

/// A recorded backend invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ReadDir(PathBuf),
    Info(PathBuf),
    MakeDir(PathBuf),
    Copy { from: PathBuf, to: PathBuf },
    MountCopy { from: PathBuf, to: PathBuf },
}

#[derive(Debug, Clone)]
struct FakeNode {
    display_name: Option<String>,
    is_dir: bool,
}

#[derive(Debug, Default)]
struct FakeState {
    nodes: BTreeMap<PathBuf, FakeNode>,
    unavailable: bool,
    failing_copies: BTreeSet<PathBuf>,
    calls: Vec<Call>,
}

/// Shared-handle fake; clones observe and mutate the same tree
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<FakeState>>,
}

impl FakeBackend {
    /// A tree holding only the directory `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let backend = Self::default();
        backend.insert(root.into(), None, true);
        backend
    }

    fn insert(&self, path: PathBuf, display_name: Option<String>, is_dir: bool) -> MountEntry {
        self.state.borrow_mut().nodes.insert(
            path.clone(),
            FakeNode {
                display_name,
                is_dir,
            },
        );
        MountEntry::new(path)
    }

    pub fn add_dir(&self, parent: impl AsRef<Path>, id: &str, name: &str) -> MountEntry {
        self.insert(parent.as_ref().join(id), Some(name.to_string()), true)
    }

    pub fn add_file(&self, parent: impl AsRef<Path>, id: &str, name: &str) -> MountEntry {
        self.insert(parent.as_ref().join(id), Some(name.to_string()), false)
    }

    /// An entry whose metadata query fails
    pub fn add_unresolvable(&self, parent: impl AsRef<Path>, id: &str) -> MountEntry {
        self.insert(parent.as_ref().join(id), None, false)
    }

    /// Make every tool invocation fail as if the program were missing
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.borrow_mut().unavailable = unavailable;
    }

    /// Make copies targeting `to` fail
    pub fn fail_copies_to(&self, to: impl Into<PathBuf>) {
        self.state.borrow_mut().failing_copies.insert(to.into());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.state.borrow().nodes.contains_key(path.as_ref())
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn check_available(&self, program: &str) -> Result<(), BackendError> {
        if self.state.borrow().unavailable {
            return Err(BackendError::Unavailable {
                program: program.to_string(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }
        Ok(())
    }

    fn fail(program: &str, stderr: String) -> BackendError {
        BackendError::Failed {
            program: program.to_string(),
            code: Some(1),
            stderr,
        }
    }

    fn copy_into(&self, program: &str, to: &Path) -> Result<(), BackendError> {
        self.check_available(program)?;
        let mut state = self.state.borrow_mut();
        if state.failing_copies.contains(to) {
            return Err(Self::fail(
                program,
                format!("{}: cannot create '{}'", program, to.display()),
            ));
        }

        let parent_is_dir = to
            .parent()
            .and_then(|parent| state.nodes.get(parent))
            .is_some_and(|node| node.is_dir);
        if parent_is_dir && !state.nodes.contains_key(to) {
            let display_name = to.file_name().map(|n| n.to_string_lossy().into_owned());
            state.nodes.insert(
                to.to_path_buf(),
                FakeNode {
                    display_name,
                    is_dir: false,
                },
            );
        }
        Ok(())
    }
}

impl Backend for FakeBackend {
    fn read_dir(&self, location: &Path) -> Result<Vec<PathBuf>, BackendError> {
        self.record(Call::ReadDir(location.to_path_buf()));
        let state = self.state.borrow();
        match state.nodes.get(location) {
            Some(node) if node.is_dir => {}
            _ => {
                return Err(BackendError::Io {
                    path: location.to_path_buf(),
                    source: io::Error::from(io::ErrorKind::NotFound),
                })
            }
        }

        // reverse order, so callers cannot lean on enumeration order
        Ok(state
            .nodes
            .keys()
            .filter(|path| path.parent() == Some(location))
            .rev()
            .cloned()
            .collect())
    }

    fn info(&self, path: &Path) -> Result<String, BackendError> {
        self.record(Call::Info(path.to_path_buf()));
        self.check_available("gio")?;
        let state = self.state.borrow();
        let node = state.nodes.get(path).ok_or_else(|| {
            Self::fail(
                "gio",
                format!("gio: {}: No such file or directory", path.display()),
            )
        })?;
        let name = node.display_name.as_ref().ok_or_else(|| {
            Self::fail(
                "gio",
                format!("gio: {}: Operation not supported", path.display()),
            )
        })?;

        let raw = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let kind = if node.is_dir { "directory" } else { "regular" };
        Ok(format!(
            "display name: {name}\nedit name: {name}\nname: {raw}\ntype: {kind}\nattributes:\n  standard::type: {}\n  standard::display-name: {name}\n  id::file: {raw}\n",
            if node.is_dir { 2 } else { 1 }
        ))
    }

    fn make_dir(&self, path: &Path) -> Result<(), BackendError> {
        self.record(Call::MakeDir(path.to_path_buf()));
        self.check_available("gio")?;
        if self.contains(path) {
            return Err(Self::fail(
                "gio",
                format!("gio: {}: File exists", path.display()),
            ));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        self.insert(path.to_path_buf(), name, true);
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<(), BackendError> {
        self.record(Call::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
        self.copy_into("cp", to)
    }

    fn mount_copy(&self, from: &Path, to: &Path) -> Result<(), BackendError> {
        self.record(Call::MountCopy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
        self.copy_into("gio", to)
    }
}

/// Local filesystem made of declared files and directories
#[derive(Debug, Clone, Default)]
pub struct FakeRealFs {
    files: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
}

impl FakeRealFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }
}

impl RealFs for FakeRealFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path) || self.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}
