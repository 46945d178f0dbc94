//! End-to-end tests for `IgnoreFile` against real files.

use std::fs;
use std::path::PathBuf;

use ignore_fs::RootResolver;
use ignore_zone::{IgnoreFile, ZONE_END, ZONE_START};
use tempfile::TempDir;

fn gitignore_in(temp: &TempDir) -> (IgnoreFile, PathBuf) {
    let path = temp.path().join(".gitignore");
    (IgnoreFile::new(&path), path)
}

#[test]
fn test_ensure_on_missing_file_creates_exact_zone() {
    let temp = TempDir::new().unwrap();
    let (file, path) = gitignore_in(&temp);

    assert!(file.ensure_ignored("*.log").unwrap());

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, format!("{ZONE_START}\n*.log\n{ZONE_END}\n"));
    assert_eq!(file.list_entries().unwrap(), vec!["*.log"]);
}

#[test]
fn test_ensure_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let (file, path) = gitignore_in(&temp);

    assert!(file.ensure_ignored("build/").unwrap());
    assert!(!file.ensure_ignored("build/").unwrap());

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.matches("build/").count(), 1);
    assert_eq!(file.list_entries().unwrap(), vec!["build/"]);
}

#[test]
fn test_remove_then_remove_again() {
    let temp = TempDir::new().unwrap();
    let (file, path) = gitignore_in(&temp);

    file.ensure_ignored("*.log").unwrap();
    assert!(file.remove_entry("*.log").unwrap());
    assert!(file.list_entries().unwrap().is_empty());

    // Markers stay in place around the now-empty zone
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, format!("{ZONE_START}\n{ZONE_END}\n"));

    assert!(!file.remove_entry("*.log").unwrap());
}

#[test]
fn test_remove_on_missing_file_is_a_noop() {
    let temp = TempDir::new().unwrap();
    let (file, path) = gitignore_in(&temp);

    assert!(!file.remove_entry("*.log").unwrap());
    assert!(!path.exists());
}

#[test]
fn test_list_on_missing_file_is_empty() {
    let temp = TempDir::new().unwrap();
    let (file, _) = gitignore_in(&temp);
    assert!(file.list_entries().unwrap().is_empty());
}

#[test]
fn test_user_content_survives_mutations() {
    let temp = TempDir::new().unwrap();
    let (file, path) = gitignore_in(&temp);
    let user_content = "# hand-written rules\nnode_modules/\n\n.env\n";
    fs::write(&path, user_content).unwrap();

    file.ensure_ignored("*.log").unwrap();
    file.ensure_ignored("build/").unwrap();
    file.remove_entry("*.log").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(user_content));
    assert_eq!(file.list_entries().unwrap(), vec!["build/"]);
}

#[test]
fn test_zone_membership_vs_global_membership() {
    let temp = TempDir::new().unwrap();
    let (file, path) = gitignore_in(&temp);
    fs::write(&path, "node_modules/\n").unwrap();
    file.ensure_ignored("*.log").unwrap();

    // Outside the zone only
    assert!(!file.is_ignored("node_modules/").unwrap());
    assert!(file.is_globally_ignored("node_modules/").unwrap());

    // Inside the zone
    assert!(file.is_ignored("*.log").unwrap());
    assert!(file.is_globally_ignored("*.log").unwrap());

    assert!(!file.is_globally_ignored("absent").unwrap());
}

#[test]
fn test_patterns_are_trimmed_before_comparison() {
    let temp = TempDir::new().unwrap();
    let (file, _) = gitignore_in(&temp);

    assert!(file.ensure_ignored("  *.log  ").unwrap());
    assert!(!file.ensure_ignored("*.log").unwrap());
    assert!(file.is_ignored(" *.log ").unwrap());
    assert_eq!(file.list_entries().unwrap(), vec!["*.log"]);
}

#[test]
fn test_blank_and_comment_patterns_are_rejected() {
    let temp = TempDir::new().unwrap();
    let (file, path) = gitignore_in(&temp);

    assert!(!file.ensure_ignored("").unwrap());
    assert!(!file.ensure_ignored("   ").unwrap());
    assert!(!file.ensure_ignored("# not an entry").unwrap());
    assert!(!path.exists());
}

#[test]
fn test_corruption_self_heals_on_next_write() {
    let temp = TempDir::new().unwrap();
    let (file, path) = gitignore_in(&temp);
    fs::write(&path, format!("user-rule\n{ZONE_START}\n")).unwrap();

    // Start without end reads as "no zone"
    assert!(file.list_entries().unwrap().is_empty());

    assert!(file.ensure_ignored("*.log").unwrap());

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        format!("user-rule\n{ZONE_START}\n\n{ZONE_START}\n*.log\n{ZONE_END}\n")
    );
}

#[test]
fn test_ensure_multiple_reports_per_pattern() {
    let temp = TempDir::new().unwrap();
    let (file, _) = gitignore_in(&temp);
    file.ensure_ignored("build/").unwrap();

    let results = file
        .ensure_multiple(["*.log", "build/", "dist/", "*.log"])
        .unwrap();

    assert_eq!(
        results,
        vec![
            ("*.log".to_string(), true),
            ("build/".to_string(), false),
            ("dist/".to_string(), true),
            ("*.log".to_string(), false),
        ]
    );
    assert_eq!(file.list_entries().unwrap(), vec!["build/", "*.log", "dist/"]);
}

#[test]
fn test_ensure_multiple_keys_results_by_input_form() {
    let temp = TempDir::new().unwrap();
    let (file, _) = gitignore_in(&temp);

    let results = file.ensure_multiple(["  *.log  "]).unwrap();
    assert_eq!(results, vec![("  *.log  ".to_string(), true)]);
    assert_eq!(file.list_entries().unwrap(), vec!["*.log"]);
}

#[test]
fn test_discover_targets_project_root_gitignore() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();
    let nested = temp.path().join("src/module");
    fs::create_dir_all(&nested).unwrap();

    let file = IgnoreFile::discover(&nested, &RootResolver::default());
    assert_eq!(file.path(), temp.path().join(".gitignore"));

    file.ensure_ignored("target/").unwrap();
    assert!(temp.path().join(".gitignore").exists());
}
