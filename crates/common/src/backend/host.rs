use std::path::Path;

use super::RealFs;

/// The host filesystem, as seen by this process
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl RealFs for HostFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
