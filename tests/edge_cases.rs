//! Edge case and error handling tests for treemark


use assert_cmd::Command;
use harness::{TestDir, run_treemark};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Failure Cases
// ============================================================================

#[test]
fn test_missing_start_path_writes_nothing() {
    let dir = TestDir::new();

    Command::cargo_bin("treemark")
        .unwrap()
        .current_dir(dir.path())
        .arg("no-such-dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read 'no-such-dir'"));

    assert!(!dir.path().join("Navigation.md").exists());
}

#[test]
fn test_start_path_is_file() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "");

    let (_stdout, stderr, success) = run_treemark(dir.path(), &["plain.txt"]);
    assert!(!success);
    assert!(stderr.starts_with("treemark: "), "{}", stderr);
    assert!(!dir.path().join("Navigation.md").exists());
}

#[test]
fn test_unwritable_output_path() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "");

    Command::cargo_bin("treemark")
        .unwrap()
        .current_dir(dir.path())
        .args(["-o", "missing/dir/out.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error writing output"));
}

#[test]
fn test_unreadable_subdirectory_aborts_run() {
    let dir = TestDir::new();
    dir.add_file("locked/secret.txt", "");
    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can still read the directory; nothing to assert there.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (_stdout, _stderr, success) = run_treemark(dir.path(), &[]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(!success, "permission errors are fatal");
    assert!(!dir.path().join("Navigation.md").exists());
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = TestDir::new();
    dir.add_file("only.md", "");
    dir.add_file("out.md", "stale stale stale stale stale stale stale");

    // out.md is listed before it gets rewritten
    let (_stdout, _stderr, success) = run_treemark(dir.path(), &["-o", "out.md"]);
    assert!(success);
    let doc = dir.read("out.md");
    assert!(!doc.contains("stale"));
    assert!(doc.starts_with("```\n"));
    assert!(doc.ends_with("\n```"));
}

// ============================================================================
// Exclusion Asymmetry
// ============================================================================

#[test]
fn test_fragment_directory_listed_but_not_descended() {
    let dir = TestDir::new();
    dir.add_file(".github/workflows/ci.yml", "");

    let (_stdout, _stderr, success) = run_treemark(dir.path(), &["-o", "out.md"]);
    assert!(success);
    // ".github" is not exactly ".git", so the line appears, but its path
    // contains ".git" so nothing beneath it is shown.
    assert_eq!(dir.read("out.md"), "```\n└─ 📂 .github\n```");
}

#[test]
fn test_start_path_containing_fragment_yields_empty_block() {
    let dir = TestDir::new();
    dir.add_file("redistribute/file.txt", "");

    let (_stdout, _stderr, success) =
        run_treemark(dir.path(), &["redistribute", "-o", "out.md"]);
    assert!(success);
    assert_eq!(dir.read("out.md"), "```\n\n```");
}

#[test]
fn test_empty_directory() {
    let dir = TestDir::new();

    Command::cargo_bin("treemark")
        .unwrap()
        .current_dir(dir.path())
        .arg("--print")
        .assert()
        .success()
        .stdout("```\n\n```\n");
}

// ============================================================================
// Symlinks and Names
// ============================================================================

#[test]
fn test_symlink_to_directory_is_followed() {
    let dir = TestDir::new();
    dir.add_file("real/inner.txt", "");
    symlink(dir.path().join("real"), dir.path().join("alias")).unwrap();

    let (stdout, _stderr, success) = run_treemark(dir.path(), &["--print"]);
    assert!(success);
    assert!(stdout.contains("📂 alias"), "{}", stdout);
    assert_eq!(stdout.matches("inner.txt").count(), 2, "{}", stdout);
}

#[test]
fn test_broken_symlink_is_listed_as_file() {
    let dir = TestDir::new();
    symlink("nonexistent.py", dir.path().join("dangling.py")).unwrap();

    let (stdout, _stderr, success) = run_treemark(dir.path(), &["--print"]);
    assert!(success);
    assert!(stdout.contains("└─ 🐍 dangling.py"), "{}", stdout);
}

#[test]
fn test_names_with_spaces_and_unicode() {
    let dir = TestDir::new();
    dir.add_file("Meeting Agenda (final).pdf", "");

    let (stdout, _stderr, success) = run_treemark(dir.path(), &["--print"]);
    assert!(success);
    // "agenda" beats the .pdf extension
    assert!(stdout.contains("└─ 📅 Meeting Agenda (final).pdf"), "{}", stdout);
}

#[test]
fn test_extensionless_readme() {
    let dir = TestDir::new();
    dir.add_file("README", "");
    dir.add_file("archive.tar.gz", "");

    let (stdout, _stderr, success) = run_treemark(dir.path(), &["--print"]);
    assert!(success);
    assert!(stdout.contains("📘 README"), "{}", stdout);
    assert!(stdout.contains("📄 archive.tar.gz"), "{}", stdout);
}
