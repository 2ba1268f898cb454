//! Two-run walkthrough: one script present, one missing.

use assert_fs::prelude::*;
use organize_scripts::{MoveOutcome, organize};

#[test]
fn first_run_moves_then_second_run_is_noop() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("a.sh").write_str("#!/bin/sh\necho a\n").unwrap();
    let candidates = ["a.sh", "b.sh"];

    let first = organize(root.path(), "build-scripts", &candidates).expect("first run");
    assert_eq!(first.moved, 1);
    assert_eq!(first.skipped(), 1);
    assert_eq!(first.outcome_of("a.sh"), Some(&MoveOutcome::Moved));
    assert_eq!(first.outcome_of("b.sh"), Some(&MoveOutcome::NotFound));
    assert!(!root.child("a.sh").path().exists());
    let moved = root.child("build-scripts").child("a.sh");
    assert_eq!(std::fs::read_to_string(moved.path()).unwrap(), "#!/bin/sh\necho a\n");

    let second = organize(root.path(), "build-scripts", &candidates).expect("second run");
    assert_eq!(second.moved, 0);
    assert_eq!(second.skipped(), 2);
    assert_eq!(second.outcome_of("a.sh"), Some(&MoveOutcome::AlreadyAtDestination));
    assert_eq!(second.outcome_of("b.sh"), Some(&MoveOutcome::NotFound));
}

#[test]
fn counts_always_cover_every_candidate() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("one.sh").touch().unwrap();
    root.child("build-scripts").create_dir_all().unwrap();
    root.child("build-scripts/two.sh").touch().unwrap();

    let candidates = ["one.sh", "two.sh", "three.sh", "bad/name.sh"];
    let summary = organize(root.path(), "build-scripts", &candidates).unwrap();
    assert_eq!(summary.moved + summary.skipped(), candidates.len());
    assert_eq!(summary.total(), candidates.len());
    assert_eq!(summary.reports.len(), candidates.len());
    assert_eq!(summary.failed, 1);
}

#[test]
fn empty_candidate_list_still_creates_archive() {
    let root = assert_fs::TempDir::new().unwrap();
    let none: [&str; 0] = [];
    let summary = organize(root.path(), "build-scripts", &none).unwrap();
    assert_eq!(summary.total(), 0);
    assert!(root.child("build-scripts").path().is_dir());
}
