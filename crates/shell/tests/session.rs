//! End-to-end command handling against an in-memory mount

mod common;

use std::path::PathBuf;

use ::common::entry::MountEntry;
use ::common::testkit::{Call, FakeRealFs};
use tempfile::TempDir;

use gvfsh::{Flow, SessionError};

#[test]
fn test_cd_by_display_name_and_pwd() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);

    let (flow, out) = common::run(&mut session, r#"cd "My Drive""#);
    assert_eq!(flow, Flow::Continue);
    assert!(out.is_empty());
    assert_eq!(
        session.mount().stack().entries(),
        &[MountEntry::new(common::ROOT), drive.my_drive.clone()]
    );

    let (_, out) = common::run(&mut session, "pwd");
    assert_eq!(out, "/My Drive\n");
    assert_eq!(session.prompt().unwrap(), "[gvfsh] /My Drive > ");
}

#[test]
fn test_cp_local_file_to_new_child() {
    let drive = common::drive();
    let temp = TempDir::new().unwrap();
    let local = temp.path().join("a.txt");
    std::fs::write(&local, b"quarterly numbers").unwrap();

    // real filesystem probes go to the host here
    let mut session = common::session(&drive.backend);
    let line = format!("cp '{}' report.pdf", local.display());
    let (_, out) = common::run(&mut session, &line);

    let destination = PathBuf::from(common::ROOT).join("report.pdf");
    assert!(drive.backend.calls().contains(&Call::Copy {
        from: local.clone(),
        to: destination.clone(),
    }));
    assert!(out.contains(&format!(
        "{} -> {}",
        local.display(),
        destination.display()
    )));
}

#[test]
fn test_cp_mount_file_into_local_directory() {
    let drive = common::drive();
    let mut session =
        common::session_with_fs(&drive.backend, FakeRealFs::new().with_dir("/tmp"));
    common::run(&mut session, "cd 'My Drive'");

    let (_, out) = common::run(&mut session, "cp report.pdf /tmp/");

    assert!(drive.backend.calls().contains(&Call::MountCopy {
        from: drive.report.path().to_path_buf(),
        to: PathBuf::from("/tmp/report.pdf"),
    }));
    assert!(out.contains("-> /tmp/report.pdf"));
}

#[test]
fn test_cp_within_mount_uses_generic_copy() {
    let drive = common::drive();
    let mut session = common::session_with_fs(&drive.backend, FakeRealFs::new());
    common::run(&mut session, "cd 'My Drive'");

    common::run(&mut session, "cp report.pdf 'report (copy).pdf'");
    assert!(drive.backend.calls().contains(&Call::Copy {
        from: drive.report.path().to_path_buf(),
        to: drive.my_drive.path().join("report (copy).pdf"),
    }));
}

#[test]
fn test_cp_missing_source_copies_nothing() {
    let drive = common::drive();
    let mut session = common::session_with_fs(&drive.backend, FakeRealFs::new());
    let before = session.mount().stack().clone();

    let (flow, out) = common::run(&mut session, "cp nonexistent.txt x.txt");

    assert_eq!(flow, Flow::Continue);
    assert_eq!(out, "cp: no such file: nonexistent.txt\n");
    assert!(drive
        .backend
        .calls()
        .iter()
        .all(|call| !matches!(call, Call::Copy { .. } | Call::MountCopy { .. })));
    assert_eq!(session.mount().stack(), &before);
}

#[test]
fn test_cd_miss_keeps_location() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);
    common::run(&mut session, "cd Photos");
    let before = session.mount().stack().clone();

    let (flow, out) = common::run(&mut session, "cd Nope");

    assert_eq!(flow, Flow::Continue);
    assert_eq!(out, "cd: no such file or directory: Nope\n");
    assert_eq!(session.mount().stack(), &before);
    assert_eq!(session.mount().current(), &drive.photos);
}

#[test]
fn test_cd_parent_and_past_root() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);
    common::run(&mut session, "cd 'My Drive'");
    common::run(&mut session, "cd Notes");
    drive.backend.clear_calls();

    common::run(&mut session, "cd ..");
    assert_eq!(session.mount().current(), &drive.my_drive);
    assert!(drive.backend.calls().is_empty());

    common::run(&mut session, "cd ..");
    common::run(&mut session, "cd ..");
    assert!(session.mount().stack().is_at_root());
    let (_, out) = common::run(&mut session, "pwd");
    assert_eq!(out, "/\n");
}

#[test]
fn test_ls_sorted_and_drops_unresolvable() {
    common::init_tracing();
    let drive = common::drive();
    drive.backend.add_unresolvable(common::ROOT, "0bRoKeN");
    drive.backend.add_file(common::ROOT, "0lOw", "archive.zip");
    let mut session = common::session(&drive.backend);

    let (_, out) = common::run(&mut session, "ls");
    assert_eq!(out, "My Drive\nPhotos\narchive.zip\n");
}

#[test]
fn test_ls_empty_directory_prints_nothing() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);
    common::run(&mut session, "cd Photos");

    let (_, out) = common::run(&mut session, "ls");
    assert!(out.is_empty());
}

#[test]
fn test_unknown_command() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);

    let (flow, out) = common::run(&mut session, "rm report.pdf");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(out, "rm: command not found\n");
    assert!(drive.backend.calls().is_empty());
}

#[test]
fn test_blank_line_is_ignored() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);
    let (flow, out) = common::run(&mut session, "   \n");
    assert_eq!(flow, Flow::Continue);
    assert!(out.is_empty());
}

#[test]
fn test_wrong_arity_prints_usage() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);

    let (flow, out) = common::run(&mut session, "cp only-one");
    assert_eq!(flow, Flow::Continue);
    assert!(out.contains("Usage"), "unexpected output: {out}");
    assert!(drive.backend.calls().is_empty());
}

#[test]
fn test_unterminated_quote_is_reported() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);

    let (flow, out) = common::run(&mut session, "cd 'My Drive");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(out, "gvfsh: unterminated single quote\n");
    assert!(session.mount().stack().is_at_root());
}

#[test]
fn test_mkdir_then_ls() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);
    common::run(&mut session, "cd 'My Drive'");

    let (_, out) = common::run(&mut session, "mkdir 'Tax Returns'");
    assert!(out.contains("Tax Returns"));
    assert!(drive
        .backend
        .calls()
        .contains(&Call::MakeDir(drive.my_drive.path().join("Tax Returns"))));

    let (_, out) = common::run(&mut session, "ls");
    assert_eq!(out, "Notes\nTax Returns\nreport.pdf\n");
}

#[test]
fn test_info_shows_metadata_table() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);
    common::run(&mut session, "cd 'My Drive'");

    let (_, out) = common::run(&mut session, "info report.pdf");
    assert!(out.contains("standard::display-name"));
    assert!(out.contains("1rEp"));

    let (_, out) = common::run(&mut session, "info missing.pdf");
    assert_eq!(out, "info: no such file or directory: missing.pdf\n");
}

#[test]
fn test_copy_failure_is_reported_and_session_continues() {
    let drive = common::drive();
    let mut session =
        common::session_with_fs(&drive.backend, FakeRealFs::new().with_dir("/tmp"));
    common::run(&mut session, "cd 'My Drive'");
    drive.backend.fail_copies_to("/tmp/report.pdf");

    let (flow, out) = common::run(&mut session, "cp report.pdf /tmp");
    assert_eq!(flow, Flow::Continue);
    assert!(out.starts_with("cp: gio failed (exit status 1)"), "{out}");

    let (_, out) = common::run(&mut session, "pwd");
    assert_eq!(out, "/My Drive\n");
}

#[test]
fn test_unavailable_tool_ends_session() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);
    drive.backend.set_unavailable(true);

    let mut out = Vec::new();
    let err = session.handle_line("ls", &mut out).unwrap_err();
    assert!(matches!(err, SessionError::Command { ref verb, .. } if verb == "ls"));
    assert!(err.to_string().starts_with("ls: 'gio' could not be run"));
}

#[test]
fn test_exit_and_quit() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);
    assert_eq!(common::run(&mut session, "exit").0, Flow::Exit);
    assert_eq!(common::run(&mut session, "quit").0, Flow::Exit);
}

#[test]
fn test_run_loop_prompts_until_exit() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);

    let input = b"cd \"My Drive\"\npwd\nexit\nls\n";
    let mut out = Vec::new();
    session.run(&input[..], &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with("[gvfsh] / > "));
    assert!(out.contains("[gvfsh] /My Drive > /My Drive\n"));
    // nothing after exit runs
    assert!(!out.contains("report.pdf"));
}

#[test]
fn test_run_loop_stops_at_end_of_input() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);

    let mut out = Vec::new();
    session.run(&b"cd Photos\n"[..], &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "[gvfsh] / > [gvfsh] /Photos > \n");
}

#[test]
fn test_run_loop_reports_trailing_backslash() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);

    let mut out = Vec::new();
    session.run(&b"cd My\\\nexit\n"[..], &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(
        out,
        "[gvfsh] / > gvfsh: trailing backslash\n[gvfsh] / > "
    );
    assert!(session.mount().stack().is_at_root());
}

#[test]
fn test_run_loop_accepts_crlf_lines() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);

    let mut out = Vec::new();
    session.run(&b"cd Photos\r\nexit\r\n"[..], &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "[gvfsh] / > [gvfsh] /Photos > ");
}

#[test]
fn test_prompt_falls_back_to_raw_name() {
    let drive = common::drive();
    let mut session = common::session(&drive.backend);
    common::run(&mut session, "cd Photos");

    // the entry loses its metadata after we entered it
    drive
        .backend
        .add_unresolvable(common::ROOT, &drive.photos.raw_name());

    assert_eq!(session.prompt().unwrap(), "[gvfsh] /0XyZ > ");
}
