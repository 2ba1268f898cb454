//! End-to-end runs of the binary against a temporary project root.

use serial_test::serial;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run(config: &Path, args: &[&str]) -> Output {
    let me = assert_cmd::cargo::cargo_bin!("organize_scripts");
    Command::new(me)
        .env("ORGANIZE_SCRIPTS_CONFIG", config)
        .args(args)
        .output()
        .expect("spawn binary")
}

fn write_config(dir: &Path, root: &Path) -> std::path::PathBuf {
    let cfg = dir.join("config.xml");
    fs::write(
        &cfg,
        format!("<config><root>{}</root><log_level>quiet</log_level></config>", root.display()),
    )
    .unwrap();
    cfg
}

#[test]
#[serial]
fn list_prints_builtin_scripts() {
    let td = tempdir().unwrap();
    let out = run(&td.path().join("unused.xml"), &["--list"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), organize_scripts::LEGACY_SCRIPTS.len());
    assert!(stdout.lines().any(|l| l == "fix-main.sh"));
}

#[test]
#[serial]
fn print_config_succeeds() {
    let td = tempdir().unwrap();
    let out = run(&td.path().join("config.xml"), &["--print-config"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("config.xml"));
}

#[test]
#[serial]
fn run_moves_present_scripts_and_reports() {
    let td = tempdir().unwrap();
    let root = td.path().join("project");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("fix-main.sh"), "echo fix").unwrap();
    let cfg = write_config(td.path(), &root);

    let out = run(&cfg, &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let total = organize_scripts::LEGACY_SCRIPTS.len();
    assert!(stdout.contains("Created build-scripts/ directory"), "{stdout}");
    assert!(stdout.contains("✓ Moved fix-main.sh"), "{stdout}");
    assert!(stdout.contains("- push-fix.sh not found"), "{stdout}");
    assert!(stdout.contains("  Moved: 1"), "{stdout}");
    assert!(stdout.contains(&format!("  Already organized: {}", total - 1)), "{stdout}");
    assert!(root.join("build-scripts").join("fix-main.sh").is_file());
    assert!(!root.join("fix-main.sh").exists());

    let again = run(&cfg, &[]);
    assert!(again.status.success());
    let stdout = String::from_utf8_lossy(&again.stdout);
    assert!(stdout.contains("→ fix-main.sh already in build-scripts"), "{stdout}");
    assert!(stdout.contains("  Moved: 0"), "{stdout}");
}

#[test]
#[serial]
fn dry_run_flag_leaves_tree_alone() {
    let td = tempdir().unwrap();
    let root = td.path().join("project");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("force-main.sh"), "x").unwrap();
    let cfg = write_config(td.path(), &root);

    let out = run(&cfg, &["--dry-run"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("✓ Would move force-main.sh"));
    assert!(root.join("force-main.sh").exists());
    assert!(!root.join("build-scripts").exists());
}

#[test]
#[serial]
fn missing_root_exits_nonzero() {
    let td = tempdir().unwrap();
    let cfg = write_config(td.path(), &td.path().join("nowhere"));
    let out = run(&cfg, &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Project root not found"), "{stderr}");
    // Piped stderr carries plain log lines.
    assert!(stderr.contains("Cannot prepare archive directory"), "{stderr}");
    assert!(!stderr.contains('\x1b'), "{stderr:?}");
    assert!(!stderr.lines().any(|l| l.starts_with("error: ")), "{stderr}");
}

#[test]
#[serial]
fn setup_error_is_reported_once() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(
        &cfg,
        format!(
            "<config><root>{}</root><target_dir>../elsewhere</target_dir></config>",
            td.path().display()
        ),
    )
    .unwrap();

    let out = run(&cfg, &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("must be a single directory name").count(), 1, "{stderr}");
    assert!(!stderr.lines().any(|l| l.starts_with("error: ")), "{stderr}");
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn failed_move_still_exits_zero() {
    use std::os::unix::fs::{MetadataExt, symlink};

    let shm = Path::new("/dev/shm");
    if !shm.is_dir() {
        eprintln!("skipping: /dev/shm not available");
        return;
    }
    let td = tempdir().unwrap();
    let archive = tempfile::tempdir_in(shm).unwrap();
    if fs::metadata(td.path()).unwrap().dev() == fs::metadata(archive.path()).unwrap().dev() {
        eprintln!("skipping: temp dir and /dev/shm share a filesystem");
        return;
    }

    let root = td.path().join("project");
    fs::create_dir(&root).unwrap();
    symlink(archive.path(), root.join("build-scripts")).unwrap();
    // A directory cannot be copied across filesystems, so this move fails.
    fs::create_dir(root.join("fix-main.sh")).unwrap();
    fs::write(root.join("push-fix.sh"), "echo push").unwrap();
    let cfg = write_config(td.path(), &root);

    let out = run(&cfg, &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("✗ Error moving fix-main.sh"), "{stdout}");
    assert!(stdout.contains("✓ Moved push-fix.sh"), "{stdout}");
    assert!(stdout.contains("  Moved: 1"), "{stdout}");
    assert!(root.join("fix-main.sh").is_dir());
    assert!(archive.path().join("push-fix.sh").is_file());
}
