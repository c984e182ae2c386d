//! Stateful navigation over one mount

use std::path::PathBuf;

use crate::backend::{Backend, BackendError, HostFs, RealFs};
use crate::copy::{self, CopyError, CopyPlan};
use crate::entry::{InvalidName, MountEntry, PARENT_TOKEN};
use crate::navigator::LocationStack;

use super::collision::{CollisionResolver, LastWriteWins};
use super::mapping::DirectoryMapping;
use super::metadata::Metadata;
use super::resolver::NameResolver;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// Metadata or enumeration failure
    #[error(transparent)]
    Tool(#[from] BackendError),
    #[error("no such file or directory: {0}")]
    NoSuchEntry(String),
    #[error(transparent)]
    Copy(#[from] CopyError),
    /// The copy tool itself failed
    #[error(transparent)]
    CopyFailed(BackendError),
    #[error(transparent)]
    InvalidName(#[from] InvalidName),
}

impl MountError {
    /// Whether the session can no longer make progress.
    ///
    /// Only an unavailable metadata tool qualifies. Copy failures never do.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MountError::Tool(e) if e.is_unavailable())
    }
}

/// The mount as the user navigates it: a backend, the location stack and the
/// policies used to build mappings.
///
/// Every name lookup builds a fresh [`DirectoryMapping`] of the current
/// location; nothing is cached between calls.
#[derive(Debug)]
pub struct MountView {
    backend: Box<dyn Backend>,
    real_fs: Box<dyn RealFs>,
    collisions: Box<dyn CollisionResolver>,
    stack: LocationStack,
}

impl MountView {
    pub fn new(backend: impl Backend + 'static, root: MountEntry) -> Self {
        Self {
            backend: Box::new(backend),
            real_fs: Box::new(HostFs),
            collisions: Box::new(LastWriteWins::new()),
            stack: LocationStack::new(root),
        }
    }

    pub fn with_real_fs(mut self, real_fs: impl RealFs + 'static) -> Self {
        self.real_fs = Box::new(real_fs);
        self
    }

    pub fn with_collisions(mut self, collisions: Box<dyn CollisionResolver>) -> Self {
        self.collisions = collisions;
        self
    }

    /* Getters */

    pub fn stack(&self) -> &LocationStack {
        &self.stack
    }

    pub fn current(&self) -> &MountEntry {
        self.stack.current()
    }

    pub fn resolver(&self) -> NameResolver<'_> {
        NameResolver::new(self.backend.as_ref())
    }

    /// Fresh mapping of the current location
    pub fn mapping(&self) -> Result<DirectoryMapping, MountError> {
        Ok(DirectoryMapping::build(
            self.backend.as_ref(),
            self.stack.current(),
            self.collisions.as_ref(),
        )?)
    }

    pub fn human_path(&self) -> Result<String, MountError> {
        Ok(self.stack.human_path(&self.resolver())?)
    }

    /// Move to `target`, a display name in the current location or `..`.
    ///
    /// `..` never touches the mount. On a miss the location is unchanged.
    pub fn change_location(&mut self, target: &str) -> Result<(), MountError> {
        if target == PARENT_TOKEN {
            self.stack.ascend();
            return Ok(());
        }

        let mapping = self.mapping()?;
        let entry = mapping
            .get(target)
            .ok_or_else(|| MountError::NoSuchEntry(target.to_string()))?;
        self.stack.descend(entry.clone());
        Ok(())
    }

    /// Create directory `name` under the current location
    pub fn make_dir(&self, name: &str) -> Result<PathBuf, MountError> {
        let path = self.stack.current().child(name)?;
        self.backend.make_dir(&path)?;
        tracing::info!("created {}", path.display());
        Ok(path)
    }

    /// Classify a copy against a fresh mapping without running it
    pub fn plan_copy(&self, source: &str, destination: &str) -> Result<CopyPlan, MountError> {
        let mapping = self.mapping()?;
        Ok(copy::classify(
            source,
            destination,
            &mapping,
            self.real_fs.as_ref(),
        )?)
    }

    /// Classify and run a copy
    pub fn copy(&self, source: &str, destination: &str) -> Result<CopyPlan, MountError> {
        let plan = self.plan_copy(source, destination)?;
        copy::execute(&plan, self.backend.as_ref()).map_err(MountError::CopyFailed)?;
        Ok(plan)
    }

    /// Full metadata of the entry named `name` in the current location
    pub fn metadata(&self, name: &str) -> Result<Metadata, MountError> {
        let mapping = self.mapping()?;
        let entry = mapping
            .get(name)
            .ok_or_else(|| MountError::NoSuchEntry(name.to_string()))?;
        let output = self.backend.info(entry.path())?;
        Ok(Metadata::parse(&output))
    }
}
