//! Disambiguating resolver

use super::types::{Collision, Resolution};
use super::CollisionResolver;

/// Keeps both siblings by suffixing the later one with its raw ID.
///
/// The incoming entry is re-keyed as `<stem>@<id-prefix>.<ext>`, where the
/// prefix is the first `id_length` characters of its raw mount name.
///
/// # Example
///
/// Two entries `1aB2cD3eF4` and `1zY9xW8vU7` both named `notes.txt`:
/// - `1aB2cD3eF4` stays at `notes.txt`
/// - `1zY9xW8vU7` becomes `notes@1zY9xW8v.txt`
#[derive(Debug, Clone)]
pub struct Disambiguate {
    /// Number of ID characters in the suffix (default: 8)
    pub id_length: usize,
}

impl Default for Disambiguate {
    fn default() -> Self {
        Self::new()
    }
}

impl Disambiguate {
    pub fn new() -> Self {
        Self { id_length: 8 }
    }

    pub fn with_id_length(id_length: usize) -> Self {
        Self { id_length }
    }

    /// Format: `<stem>@<version>.<ext>` or `<stem>@<version>` if no extension
    pub fn disambiguated_name(name: &str, version: &str) -> String {
        match name.rfind('.') {
            Some(dot) if dot > 0 && dot + 1 < name.len() => {
                format!("{}@{}.{}", &name[..dot], version, &name[dot + 1..])
            }
            _ => format!("{}@{}", name, version),
        }
    }
}

impl CollisionResolver for Disambiguate {
    fn resolve(&self, collision: &Collision) -> Resolution {
        let version: String = collision
            .incoming
            .raw_name()
            .chars()
            .take(self.id_length)
            .collect();
        let name = Self::disambiguated_name(&collision.name, &version);
        tracing::debug!(
            "'{}' already maps to {}, listing {} as '{}'",
            collision.name,
            collision.existing,
            collision.incoming,
            name
        );
        Resolution::RenameIncoming { name }
    }
}
