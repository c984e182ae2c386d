//! Shared fixtures for session tests

#![allow(dead_code)]

use ::common::entry::MountEntry;
use ::common::mount::MountView;
use ::common::testkit::{FakeBackend, FakeRealFs};

use gvfsh::{Flow, Session};

pub const ROOT: &str = "/run/user/1000/gvfs/google-drive:host=example.com,user=me";

/// A small Drive tree:
///
/// ```text
/// /                      (ROOT)
/// ├── My Drive           0AbC
/// │   ├── report.pdf     0AbC/1rEp
/// │   └── Notes          0AbC/1nOt
/// └── Photos             0XyZ
/// ```
pub struct Drive {
    pub backend: FakeBackend,
    pub my_drive: MountEntry,
    pub photos: MountEntry,
    pub report: MountEntry,
}

pub fn drive() -> Drive {
    let backend = FakeBackend::new(ROOT);
    let my_drive = backend.add_dir(ROOT, "0AbC", "My Drive");
    let photos = backend.add_dir(ROOT, "0XyZ", "Photos");
    let report = backend.add_file(my_drive.path(), "1rEp", "report.pdf");
    backend.add_dir(my_drive.path(), "1nOt", "Notes");
    Drive {
        backend,
        my_drive,
        photos,
        report,
    }
}

pub fn session(backend: &FakeBackend) -> Session {
    Session::new(MountView::new(backend.clone(), MountEntry::new(ROOT)))
}

pub fn session_with_fs(backend: &FakeBackend, fs: FakeRealFs) -> Session {
    Session::new(MountView::new(backend.clone(), MountEntry::new(ROOT)).with_real_fs(fs))
}

/// Run one line and capture what it printed
pub fn run(session: &mut Session, line: &str) -> (Flow, String) {
    let mut out = Vec::new();
    let flow = session.handle_line(line, &mut out).unwrap();
    (flow, String::from_utf8(out).unwrap())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
