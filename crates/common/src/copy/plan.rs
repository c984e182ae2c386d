use std::fmt;
use std::path::{Path, PathBuf};

use crate::backend::RealFs;
use crate::entry::validate_name;
use crate::mount::DirectoryMapping;

use super::CopyError;

/// How a copy request was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStrategy {
    /// Local file onto an existing entry of the current location
    LocalOverwrite,
    /// Local file to a new child of the current location
    LocalToNewChild,
    /// Mount entry to a new child of the current location
    WithinMount,
    /// Mount entry out to the local filesystem
    Export,
}

/// Which external primitive performs the copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTool {
    /// Plain path-to-path copy (`cp`)
    Generic,
    /// Copy that understands the mount namespace (`gio copy`)
    MountAware,
}

impl CopyStrategy {
    pub fn tool(&self) -> CopyTool {
        match self {
            CopyStrategy::LocalOverwrite
            | CopyStrategy::LocalToNewChild
            | CopyStrategy::WithinMount => CopyTool::Generic,
            CopyStrategy::Export => CopyTool::MountAware,
        }
    }
}

/// A classified copy with both endpoints resolved to concrete paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    pub strategy: CopyStrategy,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl fmt::Display for CopyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.source.display(),
            self.destination.display()
        )
    }
}

/// Decide what `cp <source> <destination>` means.
///
/// A source that is an absolute path to something that exists locally is a
/// local file; otherwise it must be a display name in `mapping`. The result
/// depends only on the arguments, the mapping and what `fs` reports, and
/// nothing is copied here.
///
/// | source | destination | strategy |
/// |---|---|---|
/// | local | mapped name | [`CopyStrategy::LocalOverwrite`] |
/// | local | other name | [`CopyStrategy::LocalToNewChild`] |
/// | mount | no leading `/` | [`CopyStrategy::WithinMount`] |
/// | mount | leading `/` | [`CopyStrategy::Export`] |
///
/// Exporting into an existing local directory appends the name as listed by
/// `ls`, so a disambiguated key like `notes@1zY9xW8v.txt` is kept as the
/// file name. The name must be a single component.
pub fn classify(
    source: &str,
    destination: &str,
    mapping: &DirectoryMapping,
    fs: &dyn RealFs,
) -> Result<CopyPlan, CopyError> {
    let source_path = Path::new(source);
    if source_path.is_absolute() && fs.exists(source_path) {
        return classify_local_source(source_path, destination, mapping);
    }

    let Some(entry) = mapping.get(source) else {
        return Err(CopyError::NoSuchFile(source.to_string()));
    };

    if destination.starts_with('/') {
        let mut target = PathBuf::from(destination);
        if fs.is_dir(&target) {
            validate_name(source)?;
            target.push(source);
        }
        return Ok(CopyPlan {
            strategy: CopyStrategy::Export,
            source: entry.path().to_path_buf(),
            destination: target,
        });
    }

    Ok(CopyPlan {
        strategy: CopyStrategy::WithinMount,
        source: entry.path().to_path_buf(),
        destination: mapping.location().child(destination)?,
    })
}

fn classify_local_source(
    source: &Path,
    destination: &str,
    mapping: &DirectoryMapping,
) -> Result<CopyPlan, CopyError> {
    if let Some(entry) = mapping.get(destination) {
        return Ok(CopyPlan {
            strategy: CopyStrategy::LocalOverwrite,
            source: source.to_path_buf(),
            destination: entry.path().to_path_buf(),
        });
    }

    if destination.starts_with('/') {
        return Err(CopyError::LocalToLocal {
            from: source.to_path_buf(),
            to: PathBuf::from(destination),
        });
    }

    Ok(CopyPlan {
        strategy: CopyStrategy::LocalToNewChild,
        source: source.to_path_buf(),
        destination: mapping.location().child(destination)?,
    })
}
