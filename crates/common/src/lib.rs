//! Display-name navigation over a GVFS Google Drive mount.
//!
//! GVFS exposes Google Drive as a tree of opaque, ID-named entries. This crate
//! maps that tree back to the display names users know, and decides how a copy
//! between the mount and the local filesystem should run.

pub mod backend;
pub mod copy;
pub mod entry;
pub mod mount;
pub mod navigator;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
