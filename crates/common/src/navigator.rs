//! Current-location tracking within the mount

use crate::backend::BackendError;
use crate::entry::MountEntry;
use crate::mount::NameResolver;

/// Path from the mount root to the current location.
///
/// `entries[0]` is the root and is never removed, so the stack is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationStack {
    entries: Vec<MountEntry>,
}

impl LocationStack {
    pub fn new(root: MountEntry) -> Self {
        Self {
            entries: vec![root],
        }
    }

    pub fn descend(&mut self, entry: MountEntry) {
        tracing::debug!("descending into {}", entry);
        self.entries.push(entry);
    }

    /// Pop the current location. Returns `false` (and does nothing) at the root.
    pub fn ascend(&mut self) -> bool {
        if self.is_at_root() {
            return false;
        }
        self.entries.pop();
        true
    }

    /* Getters */

    pub fn current(&self) -> &MountEntry {
        // non-empty by construction
        &self.entries[self.entries.len() - 1]
    }

    pub fn root(&self) -> &MountEntry {
        &self.entries[0]
    }

    pub fn is_at_root(&self) -> bool {
        self.entries.len() == 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[MountEntry] {
        &self.entries
    }

    /// `/`-joined display names of every entry below the root.
    ///
    /// Entries that fail to resolve are shown by their raw name. Only an
    /// unavailable metadata tool is an error.
    pub fn human_path(&self, resolver: &NameResolver<'_>) -> Result<String, BackendError> {
        let names = self.entries[1..]
            .iter()
            .map(|entry| resolver.resolve_or_raw(entry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(render_path(&names))
    }
}

fn render_path(names: &[String]) -> String {
    format!("/{}", names.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::FakeBackend;

    fn stack() -> LocationStack {
        LocationStack::new(MountEntry::new("/drive"))
    }

    #[test]
    fn test_new_stack_is_root() {
        let stack = stack();
        assert_eq!(stack.len(), 1);
        assert!(stack.is_at_root());
        assert_eq!(stack.current(), stack.root());
    }

    #[test]
    fn test_ascend_at_root_is_noop() {
        let mut stack = stack();
        let before = stack.clone();
        assert!(!stack.ascend());
        assert!(!stack.ascend());
        assert_eq!(stack, before);
        assert_eq!(stack.current(), &MountEntry::new("/drive"));
    }

    #[test]
    fn test_descend_then_ascend() {
        let mut stack = stack();
        let child = MountEntry::new("/drive/0AbC");
        stack.descend(child.clone());
        assert_eq!(stack.current(), &child);
        assert_eq!(stack.len(), 2);

        assert!(stack.ascend());
        assert!(stack.is_at_root());
    }

    #[test]
    fn test_round_trip_restores_stack() {
        let mut stack = stack();
        stack.descend(MountEntry::new("/drive/0AbC"));
        stack.descend(MountEntry::new("/drive/0AbC/1xY"));
        let before = stack.clone();

        let top = stack.current().clone();
        assert!(stack.ascend());
        stack.descend(top);
        assert_eq!(stack, before);

        stack.descend(MountEntry::new("/drive/0AbC/1xY/2zz"));
        assert!(stack.ascend());
        assert_eq!(stack, before);
    }

    #[test]
    fn test_human_path_root() {
        let backend = FakeBackend::new("/drive");
        let resolver = NameResolver::new(&backend);
        assert_eq!(stack().human_path(&resolver).unwrap(), "/");
    }

    #[test]
    fn test_human_path_uses_display_names() {
        let backend = FakeBackend::new("/drive");
        let my_drive = backend.add_dir("/drive", "0AbC", "My Drive");
        let docs = backend.add_dir(my_drive.path(), "1xY", "Docs");

        let mut stack = stack();
        stack.descend(my_drive);
        stack.descend(docs);

        let resolver = NameResolver::new(&backend);
        assert_eq!(stack.human_path(&resolver).unwrap(), "/My Drive/Docs");
    }

    #[test]
    fn test_human_path_falls_back_to_raw_name() {
        let backend = FakeBackend::new("/drive");
        let my_drive = backend.add_dir("/drive", "0AbC", "My Drive");
        let broken = backend.add_unresolvable(my_drive.path(), "1brokenId");

        let mut stack = stack();
        stack.descend(my_drive);
        stack.descend(broken);

        let resolver = NameResolver::new(&backend);
        assert_eq!(stack.human_path(&resolver).unwrap(), "/My Drive/1brokenId");
    }

    #[test]
    fn test_human_path_root_needs_no_queries() {
        let backend = FakeBackend::new("/drive");
        backend.set_unavailable(true);
        let resolver = NameResolver::new(&backend);
        assert_eq!(stack().human_path(&resolver).unwrap(), "/");
    }
}
