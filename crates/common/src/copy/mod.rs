//! Copy classification and execution across the mount and the local filesystem
//!
//! `cp` arguments carry no flag saying which realm they belong to. [`classify`]
//! decides from the arguments, the current directory mapping and the local
//! filesystem which of four strategies applies, and [`execute`] runs the
//! matching copy tool.

mod execute;
mod plan;

pub use execute::execute;
pub use plan::{classify, CopyPlan, CopyStrategy, CopyTool};

use std::path::PathBuf;

use crate::entry::InvalidName;

#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Source is neither an existing absolute path nor a mapped display name
    #[error("no such file: {0}")]
    NoSuchFile(String),
    #[error("copying between local paths is not supported: {} -> {}", .from.display(), .to.display())]
    LocalToLocal { from: PathBuf, to: PathBuf },
    #[error(transparent)]
    InvalidName(#[from] InvalidName),
}
