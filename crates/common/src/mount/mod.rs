//! Display-name view over the mount namespace

pub mod collision;
pub mod discovery;
mod mapping;
pub mod metadata;
mod resolver;
mod view;

pub use collision::{CollisionPolicy, CollisionResolver};
pub use discovery::{discover_root, gvfs_dir, DiscoveryError};
pub use mapping::DirectoryMapping;
pub use metadata::Metadata;
pub use resolver::NameResolver;
pub use view::{MountError, MountView};
